//! Order workflow for a small beachwear manufacturer.
//!
//! Products live in production lines; customers order them through an
//! [`OrderManager`], which assigns the product, swaps in the updated line and
//! journals the change. Every fallible operation has an [`Outcome`] form and a
//! `try_*` form returning `Result`.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod event_sourcing;
pub mod logging;
pub mod metrics;
pub mod outcome;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use domain::customer::{Customer, CustomerError, CustomerId, Email, PaymentMethod};
pub use domain::order::{
    ManagerConfig, OrderCommand, OrderCommandHandler, OrderError, OrderEvent, OrderManager,
    OrderReceipt, OrderReply,
};
pub use domain::product::{Product, ProductError, ProductId, ProductStatus, ProductVariant};
pub use domain::production_line::{LineError, ProductionLine};
pub use metrics::Metrics;
pub use outcome::Outcome;
