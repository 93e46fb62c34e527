pub mod hotel_commands;
pub mod ingest_commands;
pub mod summary_commands;

pub use hotel_commands::*;
pub use ingest_commands::*;
pub use summary_commands::*;
