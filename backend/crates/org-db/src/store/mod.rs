pub mod lead_work_item_source;
pub mod sqlite_node_store;
