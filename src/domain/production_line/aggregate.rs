use serde::Serialize;
use std::sync::Arc;

use super::errors::LineError;
use crate::domain::product::{Product, ProductId};
use crate::outcome::Outcome;

// ============================================================================
// Production Line - Copy-on-Write Product Collection
// ============================================================================
//
// Products keep insertion order; the last one is the most recently added.
// Updates never touch `self`: they build a new line that shares every
// unchanged product with the old one.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionLine {
    name: String,
    description: String,
    products: Vec<Arc<Product>>,
}

impl ProductionLine {
    /// Build a line from its initial products.
    ///
    /// Ids must be unique inside the line; a repeated id is reported the same
    /// way [`ProductionLine::try_add_product`] would report it.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> Result<Self, LineError> {
        let mut line = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::with_capacity(products.len()),
        };

        for product in products {
            line.check_new_id(&product)?;
            line.products.push(Arc::new(product));
        }

        Ok(line)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Most recently added product
    pub fn last(&self) -> Option<&Arc<Product>> {
        self.products.last()
    }

    pub fn find(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    pub fn update(&self, updated: Product) -> Outcome<ProductionLine> {
        Outcome::from_result(
            self.try_update(Arc::new(updated)),
            "Linea produttiva aggiornata con successo.",
        )
    }

    /// New line with the member sharing `updated`'s id replaced in place
    pub fn try_update(&self, updated: Arc<Product>) -> Result<ProductionLine, LineError> {
        let id = updated.id();
        if !self.contains(id) {
            return Err(LineError::ProductNotFound(id));
        }

        let products = self
            .products
            .iter()
            .map(|p| {
                if p.id() == id {
                    Arc::clone(&updated)
                } else {
                    Arc::clone(p)
                }
            })
            .collect();

        tracing::debug!(line = %self.name, product_id = %id, "Line member replaced");
        Ok(self.with_products(products))
    }

    pub fn add_product(&self, product: Product) -> Outcome<ProductionLine> {
        let id = product.id();
        Outcome::from_result(
            self.try_add_product(product),
            format!("[SUCCESSO] Prodotto ID: {id} messo in produzione."),
        )
    }

    /// New line with `product` appended at the end
    pub fn try_add_product(&self, product: Product) -> Result<ProductionLine, LineError> {
        self.check_new_id(&product)?;

        let mut products = self.products.clone();
        products.push(Arc::new(product));

        tracing::debug!(line = %self.name, size = products.len(), "Product appended to line");
        Ok(self.with_products(products))
    }

    fn check_new_id(&self, product: &Product) -> Result<(), LineError> {
        match self.find(product.id()) {
            None => Ok(()),
            Some(existing) if **existing == *product => Err(LineError::Duplicate(product.id())),
            Some(_) => Err(LineError::IdConflict(product.id())),
        }
    }

    fn with_products(&self, products: Vec<Arc<Product>>) -> ProductionLine {
        ProductionLine {
            name: self.name.clone(),
            description: self.description.clone(),
            products,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Customer, PaymentMethod};
    use crate::domain::product::ProductStatus;

    fn kids_boxer() -> Product {
        Product::plain("boxer", ProductId(201), "5 anni", "Giallo", ProductStatus::Available)
    }

    fn kids_slip() -> Product {
        Product::plain("slip", ProductId(202), "8 anni", "Verde", ProductStatus::Available)
    }

    fn sea_line() -> ProductionLine {
        ProductionLine::new(
            "Linea Sea",
            "Linea sostenibile di prodotti beachwear per bambini",
            vec![kids_boxer()],
        )
        .unwrap()
    }

    fn buyer() -> Arc<Customer> {
        Arc::new(Customer::new("Marta", "Bianchi", "dbianchi@mail.com", PaymentMethod::DebitCard).unwrap())
    }

    #[test]
    fn test_new_line_keeps_order() {
        let line = ProductionLine::new("L", "d", vec![kids_boxer(), kids_slip()]).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line.products()[0].id(), ProductId(201));
        assert_eq!(line.last().unwrap().id(), ProductId(202));
    }

    #[test]
    fn test_new_line_rejects_repeated_ids() {
        let duplicate = ProductionLine::new("L", "d", vec![kids_boxer(), kids_boxer()]);
        assert_eq!(duplicate, Err(LineError::Duplicate(ProductId(201))));

        let other = Product::plain("slip", ProductId(201), "S", "Rosso", ProductStatus::Available);
        let conflict = ProductionLine::new("L", "d", vec![kids_boxer(), other]);
        assert_eq!(conflict, Err(LineError::IdConflict(ProductId(201))));
    }

    #[test]
    fn test_empty_line() {
        let line = ProductionLine::new("Vuota", "", vec![]).unwrap();
        assert!(line.is_empty());
        assert!(line.last().is_none());
    }

    #[test]
    fn test_add_product_appends() {
        let line = sea_line();

        let outcome = line.add_product(kids_slip());

        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "[SUCCESSO] Prodotto ID: 202 messo in produzione.");
        let updated = outcome.data.unwrap();
        assert_eq!(updated.len(), line.len() + 1);
        assert_eq!(updated.last().unwrap().id(), ProductId(202));
        assert_eq!(updated.name(), "Linea Sea");

        // Old snapshot unchanged
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_add_identical_product_is_duplicate() {
        let outcome = sea_line().add_product(kids_boxer());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "[DUPLICATO] Il prodotto ID 201 è già presente.");
    }

    #[test]
    fn test_add_different_product_with_same_id_is_conflict() {
        let typo = Product::plain("slip", ProductId(201), "8 anni", "Verde", ProductStatus::Available);
        let outcome = sea_line().add_product(typo);
        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.message,
            "[CONFLITTO ID] L'ID 201 è già assegnato ad un altro prodotto."
        );
    }

    #[test]
    fn test_update_replaces_in_place() {
        let line = ProductionLine::new("L", "d", vec![kids_boxer(), kids_slip()]).unwrap();
        let assigned = kids_boxer().try_assign(&buyer()).unwrap();

        let updated = line.try_update(Arc::new(assigned.clone())).unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(*updated.products()[0], assigned);
        // Untouched members are shared, not copied
        assert!(Arc::ptr_eq(&updated.products()[1], &line.products()[1]));
        assert_eq!(line.products()[0].status(), ProductStatus::Available);
    }

    #[test]
    fn test_update_unknown_product_fails() {
        let outcome = sea_line().update(kids_slip());
        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.message,
            "[ERRORE AGGIORNAMENTO] Prodotto ID 202 non trovato in questa linea."
        );
    }
}
