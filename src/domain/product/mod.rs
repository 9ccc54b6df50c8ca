// ============================================================================
// Product Domain
// ============================================================================
//
// - Value objects (ProductId, ProductStatus, ProductVariant)
// - Errors (ProductError)
// - Product snapshot and its assignment transition
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
