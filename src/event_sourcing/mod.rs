// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic event envelope used by the in-memory order journal.
// Domain-specific code is in src/domain/
//
// ============================================================================

mod core;

pub use self::core::*;
