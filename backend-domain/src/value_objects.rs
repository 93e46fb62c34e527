// Domain value objects
pub mod compliance_status;
pub mod event_type;
pub mod source_system;

pub use compliance_status::*;
pub use event_type::*;
pub use source_system::*;
