// ============================================================================
// Production Line Domain
// ============================================================================

pub mod errors;
pub mod aggregate;

pub use errors::*;
pub use aggregate::*;
