// Backend Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod postprocess;
pub mod queries;
pub mod state;

pub use error::AppError;
pub use metrics::Metrics;
pub use postprocess::PostProcessJob;
pub use state::AppState;
