// Domain entities

pub mod config;
pub mod event;
pub mod hotel;
pub mod query;
pub mod report;
pub mod summary;

pub use config::*;
pub use event::*;
pub use hotel::*;
pub use query::*;
pub use report::*;
pub use summary::*;
