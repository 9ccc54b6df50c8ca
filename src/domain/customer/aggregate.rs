use serde::Serialize;
use std::sync::Arc;

use super::errors::CustomerError;
use super::value_objects::{CustomerId, Email, PaymentMethod};
use crate::domain::order::{OrderManager, OrderReceipt};
use crate::domain::product::Product;
use crate::outcome::Outcome;

// ============================================================================
// Customer - Ordering Party
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    email: Email,
    payment_method: PaymentMethod,
}

impl Customer {
    /// Register a customer, validating the email address
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: &str,
        payment_method: PaymentMethod,
    ) -> Result<Self, CustomerError> {
        let email = Email::parse(email)?;

        Ok(Self {
            id: CustomerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            payment_method,
        })
    }

    /// Like [`Customer::new`], with the payment method given as text
    pub fn parse(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: &str,
        payment_method: &str,
    ) -> Result<Self, CustomerError> {
        let email = Email::parse(email)?;
        let payment_method = payment_method.parse()?;

        Ok(Self {
            id: CustomerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            payment_method,
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Start a purchase; the manager does the actual work.
    pub fn order_product(
        self: &Arc<Self>,
        product: &Product,
        manager: &mut OrderManager,
    ) -> Outcome<OrderReceipt> {
        tracing::debug!(
            customer_id = %self.id,
            product_id = %product.id(),
            "Customer placing order"
        );
        manager.execute_order(self, product)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
