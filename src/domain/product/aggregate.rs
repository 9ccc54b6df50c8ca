use serde::Serialize;
use std::sync::Arc;

use super::errors::ProductError;
use super::value_objects::{ProductId, ProductStatus, ProductVariant};
use crate::domain::customer::Customer;
use crate::outcome::Outcome;

// ============================================================================
// Product - Immutable Snapshot
// ============================================================================
//
// A Product never changes after construction. Assigning it to a customer
// yields a new snapshot with the same identity; the old one stays valid as
// history.
//
// Invariant: `assigned_customer.is_some()` implies `status == Ordered`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    kind: String,
    id: ProductId,
    size: String,
    color: String,
    status: ProductStatus,
    #[serde(flatten)]
    variant: ProductVariant,
    assigned_customer: Option<Arc<Customer>>,
}

impl Product {
    pub fn plain(
        kind: impl Into<String>,
        id: ProductId,
        size: impl Into<String>,
        color: impl Into<String>,
        status: ProductStatus,
    ) -> Self {
        Self {
            kind: kind.into(),
            id,
            size: size.into(),
            color: color.into(),
            status,
            variant: ProductVariant::Plain,
            assigned_customer: None,
        }
    }

    /// Customized product; the surcharge must be a finite, non-negative amount
    pub fn customized(
        kind: impl Into<String>,
        id: ProductId,
        size: impl Into<String>,
        color: impl Into<String>,
        status: ProductStatus,
        customization_text: impl Into<String>,
        surcharge: f64,
    ) -> Result<Self, ProductError> {
        if !surcharge.is_finite() || surcharge < 0.0 {
            return Err(ProductError::InvalidSurcharge { id, surcharge });
        }

        Ok(Self {
            kind: kind.into(),
            id,
            size: size.into(),
            color: color.into(),
            status,
            variant: ProductVariant::Customized {
                customization_text: customization_text.into(),
                surcharge,
            },
            assigned_customer: None,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn variant(&self) -> &ProductVariant {
        &self.variant
    }

    pub fn assigned_customer(&self) -> Option<&Arc<Customer>> {
        self.assigned_customer.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available && self.assigned_customer.is_none()
    }

    /// Assign to `customer`, moving to Ordered
    pub fn assign(&self, customer: &Arc<Customer>) -> Outcome<Product> {
        self.assign_with_status(customer, ProductStatus::Ordered)
    }

    pub fn assign_with_status(
        &self,
        customer: &Arc<Customer>,
        new_status: ProductStatus,
    ) -> Outcome<Product> {
        Outcome::from_result(
            self.try_assign_with_status(customer, new_status),
            "Prodotto assegnato correttamente.",
        )
    }

    pub fn try_assign(&self, customer: &Arc<Customer>) -> Result<Product, ProductError> {
        self.try_assign_with_status(customer, ProductStatus::Ordered)
    }

    pub fn try_assign_with_status(
        &self,
        customer: &Arc<Customer>,
        new_status: ProductStatus,
    ) -> Result<Product, ProductError> {
        if !self.is_available() {
            tracing::debug!(
                product_id = %self.id,
                status = %self.status,
                assigned = self.assigned_customer.is_some(),
                "Assignment refused"
            );
            return Err(ProductError::Unavailable {
                id: self.id,
                status: self.status,
            });
        }
        if new_status != ProductStatus::Ordered {
            return Err(ProductError::InvalidAssignmentStatus(new_status));
        }

        let assigned = self.reassigned(Arc::clone(customer), new_status);
        tracing::debug!(
            product_id = %assigned.id,
            customer_id = %customer.id(),
            status = %assigned.status,
            "Product assigned"
        );
        Ok(assigned)
    }

    /// Same-identity copy carrying the new status and owner
    fn reassigned(&self, customer: Arc<Customer>, status: ProductStatus) -> Product {
        let variant = match &self.variant {
            ProductVariant::Plain => ProductVariant::Plain,
            ProductVariant::Customized {
                customization_text,
                surcharge,
            } => ProductVariant::Customized {
                customization_text: customization_text.clone(),
                surcharge: *surcharge,
            },
        };

        Product {
            kind: self.kind.clone(),
            id: self.id,
            size: self.size.clone(),
            color: self.color.clone(),
            status,
            variant,
            assigned_customer: Some(customer),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::PaymentMethod;

    fn customer() -> Arc<Customer> {
        Arc::new(Customer::new("Luca", "Rossi", "lucarossi@atleta.com", PaymentMethod::Card).unwrap())
    }

    fn boxer(status: ProductStatus) -> Product {
        Product::plain("boxer", ProductId(101), "L", "Blu", status)
    }

    fn embroidered() -> Product {
        Product::customized(
            "costume intero",
            ProductId(103),
            "M",
            "Nero",
            ProductStatus::Available,
            "Nome ricamato: Luca Rossi",
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn test_assign_returns_new_snapshot() {
        let original = boxer(ProductStatus::Available);
        let buyer = customer();

        let outcome = original.assign(&buyer);

        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "Prodotto assegnato correttamente.");
        let assigned = outcome.data.unwrap();
        assert_eq!(assigned.status(), ProductStatus::Ordered);
        assert_eq!(assigned.assigned_customer(), Some(&buyer));
        assert_eq!(assigned.id(), original.id());
        assert_eq!(assigned.kind(), "boxer");
        assert_eq!(assigned.size(), "L");
        assert_eq!(assigned.color(), "Blu");

        // Original untouched
        assert_eq!(original.status(), ProductStatus::Available);
        assert!(original.assigned_customer().is_none());
    }

    #[test]
    fn test_customized_payload_survives_assignment() {
        let original = embroidered();
        let assigned = original.try_assign(&customer()).unwrap();

        assert_eq!(assigned.variant(), original.variant());
        assert_eq!(assigned.variant().surcharge(), 5.0);
    }

    #[test]
    fn test_assigned_product_cannot_be_reassigned() {
        let assigned = boxer(ProductStatus::Available).try_assign(&customer()).unwrap();

        for _ in 0..2 {
            let outcome = assigned.assign(&customer());
            assert!(!outcome.succeeded);
            assert_eq!(
                outcome.message,
                "[ERRORE DISPONIBILITÀ] Il prodotto ID 101 è ordinato o già assegnato."
            );
        }
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let product = boxer(ProductStatus::OutOfStock);
        let result = product.try_assign(&customer());
        assert!(matches!(
            result,
            Err(ProductError::Unavailable { status: ProductStatus::OutOfStock, .. })
        ));
    }

    #[test]
    fn test_assignment_must_end_in_ordered() {
        let product = boxer(ProductStatus::Available);
        let result = product.try_assign_with_status(&customer(), ProductStatus::OutOfStock);
        assert_eq!(
            result,
            Err(ProductError::InvalidAssignmentStatus(ProductStatus::OutOfStock))
        );
    }

    #[test]
    fn test_negative_surcharge_rejected() {
        let result = Product::customized(
            "slip",
            ProductId(7),
            "S",
            "Verde",
            ProductStatus::Available,
            "Logo",
            -1.0,
        );
        assert!(matches!(result, Err(ProductError::InvalidSurcharge { .. })));

        let nan = Product::customized(
            "slip",
            ProductId(7),
            "S",
            "Verde",
            ProductStatus::Available,
            "Logo",
            f64::NAN,
        );
        assert!(nan.is_err());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(boxer(ProductStatus::Available), boxer(ProductStatus::Available));
        assert_ne!(boxer(ProductStatus::Available), boxer(ProductStatus::OutOfStock));
    }

    #[test]
    fn test_product_serialization_flattens_variant() {
        let json = serde_json::to_value(embroidered()).unwrap();
        assert_eq!(json["id"], 103);
        assert_eq!(json["status"], "available");
        assert_eq!(json["variant"], "customized");
        assert_eq!(json["surcharge"], 5.0);
        assert!(json["assigned_customer"].is_null());
    }
}
