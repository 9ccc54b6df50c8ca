// ============================================================================
// Order Domain - Fulfillment Across Production Lines
// ============================================================================
//
// - Commands (PlaceOrder, AddProduct)
// - Events (ProductAssigned, ProductAdded)
// - Errors (OrderError enum)
// - OrderManager, owner of the production lines
// - Command Handler (OrderCommandHandler)
//
// ============================================================================

pub mod commands;
pub mod events;
pub mod errors;
pub mod manager;
pub mod command_handler;

// Re-export for convenience
pub use commands::*;
pub use events::*;
pub use errors::*;
pub use manager::*;
pub use command_handler::*;
