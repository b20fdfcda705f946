pub mod engine_options;
pub mod reassignment_engine;
