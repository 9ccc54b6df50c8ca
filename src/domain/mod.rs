// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each area has its own subdirectory with value objects, errors and the
// entity implementation:
// - product: immutable product snapshots and the assignment transition
// - customer: validated ordering party
// - production_line: copy-on-write product collections
// - order: the OrderManager orchestrating orders across lines
//
// ============================================================================

pub mod product;
pub mod customer;
pub mod production_line;
pub mod order;
