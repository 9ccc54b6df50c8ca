// ============================================================================
// Event Sourcing Core - Generic Abstractions
// ============================================================================
//
// No domain-specific code here; payload types live under src/domain/.
//
// ============================================================================

pub mod event;

pub use event::{DomainEvent, EventEnvelope, serialize_event, deserialize_event};
