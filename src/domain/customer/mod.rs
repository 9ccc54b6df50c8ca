// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (CustomerId, Email, PaymentMethod)
// - Errors (CustomerError)
// - Customer entity, which hands orders over to the OrderManager
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
