//! Result store: SQLite schema, models and queries

pub mod init;
pub mod models;
pub mod results;

pub use init::*;
pub use models::*;
pub use results::*;
