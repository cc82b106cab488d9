//! Command implementations.

pub mod analyze;
pub mod chunks;
pub mod config;

pub use self::analyze::{execute_analyze, resolve_inputs, run_batch, BatchSummary};
pub use self::chunks::execute_chunks;
pub use self::config::execute_config;
