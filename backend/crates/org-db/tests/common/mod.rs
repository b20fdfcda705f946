pub mod fixtures;
pub mod racing;
pub mod test_db;

pub use fixtures::*;
pub use racing::*;
pub use test_db::*;
