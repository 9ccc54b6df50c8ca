use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::domain::product::Product;

// ============================================================================
// Order Commands - Represent caller intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum OrderCommand {
    PlaceOrder {
        customer: Arc<Customer>,
        product: Product,
    },
    AddProduct {
        line_name: String,
        product: Product,
    },
}

impl OrderCommand {
    pub fn name(&self) -> &'static str {
        match self {
            OrderCommand::PlaceOrder { .. } => "PlaceOrder",
            OrderCommand::AddProduct { .. } => "AddProduct",
        }
    }
}
