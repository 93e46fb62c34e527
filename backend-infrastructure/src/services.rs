pub mod authority_gateway;

pub use authority_gateway::*;
