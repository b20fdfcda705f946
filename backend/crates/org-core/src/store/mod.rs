pub mod memory;
pub mod node_store;
pub mod work_item_source;
