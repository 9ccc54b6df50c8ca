use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;
use crate::domain::product::{ProductId, ProductStatus};
use crate::event_sourcing::DomainEvent;

// ============================================================================
// Order Events - Committed Changes to the Production Lines
// ============================================================================

/// Order Event - Union type for all manager journal entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    ProductAssigned(ProductAssigned),
    ProductAdded(ProductAdded),
}

impl OrderEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            OrderEvent::ProductAssigned(e) => e.product_id,
            OrderEvent::ProductAdded(e) => e.product_id,
        }
    }
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ProductAssigned(_) => "ProductAssigned",
            OrderEvent::ProductAdded(_) => "ProductAdded",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Product Assigned - an order went through
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductAssigned {
    pub product_id: ProductId,
    pub line_name: String,
    pub customer_id: CustomerId,
    pub status: ProductStatus,
}

/// Product Added - a new product entered a line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductAdded {
    pub product_id: ProductId,
    pub line_name: String,
}

// ============================================================================
// Unit Tests
// ============================================================================
