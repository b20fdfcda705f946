pub mod sqlite_pool;
