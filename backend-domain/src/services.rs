// Domain services (pure aggregation logic)

pub mod aggregator;

pub use aggregator::*;
