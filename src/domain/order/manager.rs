use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::errors::OrderError;
use super::events::{OrderEvent, ProductAdded, ProductAssigned};
use crate::domain::customer::Customer;
use crate::domain::product::{Product, ProductId};
use crate::domain::production_line::ProductionLine;
use crate::event_sourcing::{DomainEvent, EventEnvelope};
use crate::outcome::Outcome;

// ============================================================================
// Order Manager - Orchestration Across Production Lines
// ============================================================================
//
// Sole owner of the production line list. Every committed change swaps one
// line for its updated copy and appends an event to the journal; a failed
// step leaves both untouched.
//
// Lines are matched by identity (Arc::ptr_eq) when replaced, so duplicate
// line names never cause the wrong line to be overwritten.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Refuse the same product id living in more than one line
    pub reject_cross_line_duplicates: bool,
}

/// Result payload of a successful order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub product: Arc<Product>,
    pub line: Arc<ProductionLine>,
}

#[derive(Debug, Clone)]
pub struct OrderManager {
    id: Uuid,
    lines: Vec<Arc<ProductionLine>>,
    history: Vec<EventEnvelope<OrderEvent>>,
    config: ManagerConfig,
}

impl OrderManager {
    /// Tolerant constructor: ids shared between lines are logged, and orders
    /// resolve to the first line holding the id.
    pub fn new(lines: Vec<ProductionLine>) -> Self {
        let lines: Vec<Arc<ProductionLine>> = lines.into_iter().map(Arc::new).collect();

        for duplicate in cross_line_duplicates(&lines) {
            tracing::warn!(error = %duplicate, "Product id registered in more than one line");
        }

        let manager = Self {
            id: Uuid::new_v4(),
            lines,
            history: Vec::new(),
            config: ManagerConfig::default(),
        };
        tracing::debug!(manager_id = %manager.id, lines = manager.lines.len(), "Order manager ready");
        manager
    }

    pub fn with_config(lines: Vec<ProductionLine>, config: ManagerConfig) -> Result<Self, OrderError> {
        if config.reject_cross_line_duplicates {
            let shared: Vec<Arc<ProductionLine>> = lines.iter().cloned().map(Arc::new).collect();
            if let Some(duplicate) = cross_line_duplicates(&shared).into_iter().next() {
                return Err(duplicate);
            }
        }

        let mut manager = Self::new(lines);
        manager.config = config;
        Ok(manager)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Snapshot of the current lines; changing it never affects the manager
    pub fn lines(&self) -> Vec<Arc<ProductionLine>> {
        self.lines.clone()
    }

    /// First line called `name`
    pub fn line(&self, name: &str) -> Option<Arc<ProductionLine>> {
        self.lines.iter().find(|l| l.name() == name).cloned()
    }

    /// Committed changes, oldest first
    pub fn history(&self) -> &[EventEnvelope<OrderEvent>] {
        &self.history
    }

    pub fn execute_order(&mut self, customer: &Arc<Customer>, product: &Product) -> Outcome<OrderReceipt> {
        match self.try_execute_order(customer, product) {
            Ok(receipt) => Outcome::success(
                format!(
                    "[SUCCESSO] Ordine completato: il prodotto ID {} è stato assegnato a {}.",
                    product.id(),
                    customer.full_name()
                ),
                receipt,
            ),
            Err(error) => {
                tracing::warn!(product_id = %product.id(), error = %error, "Order rejected");
                Outcome::from_error(error)
            }
        }
    }

    /// Locate → check snapshot → assign → update line → commit
    pub fn try_execute_order(
        &mut self,
        customer: &Arc<Customer>,
        product: &Product,
    ) -> Result<OrderReceipt, OrderError> {
        let id = product.id();

        let line = self
            .line_holding(id)
            .ok_or(OrderError::ProductNotRegistered(id))?;

        if let Some(registered) = line.find(id) {
            if **registered != *product {
                return Err(OrderError::StaleSnapshot {
                    id,
                    current: registered.status(),
                    line: line.name().to_string(),
                });
            }
        }

        let assigned = Arc::new(product.try_assign(customer)?);
        let updated = Arc::new(line.try_update(Arc::clone(&assigned))?);

        self.replace_line(&line, Arc::clone(&updated));
        self.record(OrderEvent::ProductAssigned(ProductAssigned {
            product_id: id,
            line_name: updated.name().to_string(),
            customer_id: customer.id(),
            status: assigned.status(),
        }));

        Ok(OrderReceipt {
            product: assigned,
            line: updated,
        })
    }

    pub fn add_product_to_line(&mut self, line_name: &str, product: Product) -> Outcome<Arc<ProductionLine>> {
        let Some(line) = self.line(line_name) else {
            let error = OrderError::LineNotFound(line_name.to_string());
            tracing::warn!(error = %error, "Product not added");
            return Outcome::from_error(error);
        };

        let id = product.id();
        if self.config.reject_cross_line_duplicates {
            if let Some(other) = self.line_holding(id).filter(|l| !Arc::ptr_eq(l, &line)) {
                return Outcome::from_error(OrderError::CrossLineDuplicate {
                    id,
                    first: other.name().to_string(),
                    second: line.name().to_string(),
                });
            }
        }

        let outcome = line.add_product(product).map(Arc::new);
        match outcome.data() {
            Some(updated) => {
                self.replace_line(&line, Arc::clone(updated));
                self.record(OrderEvent::ProductAdded(ProductAdded {
                    product_id: id,
                    line_name: line.name().to_string(),
                }));
            }
            None => tracing::warn!(line = line_name, product_id = %id, reason = %outcome.message, "Product not added"),
        }
        outcome
    }

    /// One human-readable row per line, in line order
    pub fn summary(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                let last_id = line
                    .last()
                    .map(|p| p.id().to_string())
                    .unwrap_or_else(|| "Nessuno".to_string());
                format!(
                    "{}: {} prodotti presenti (ultimo ID: {}).",
                    line.name(),
                    line.len(),
                    last_id
                )
            })
            .collect()
    }

    fn line_holding(&self, id: ProductId) -> Option<Arc<ProductionLine>> {
        self.lines.iter().find(|l| l.contains(id)).cloned()
    }

    fn replace_line(&mut self, old: &Arc<ProductionLine>, new: Arc<ProductionLine>) {
        self.lines = self
            .lines
            .iter()
            .map(|l| if Arc::ptr_eq(l, old) { Arc::clone(&new) } else { Arc::clone(l) })
            .collect();
    }

    fn record(&mut self, event: OrderEvent) {
        let sequence = self.history.len() as i64 + 1;
        tracing::info!(
            manager_id = %self.id,
            sequence,
            event_type = event.event_type(),
            product_id = %event.product_id(),
            "Change committed"
        );
        self.history.push(EventEnvelope::new(self.id, sequence, event));
    }
}

/// Every (id, first line, other line) triple where an id shows up in two lines
fn cross_line_duplicates(lines: &[Arc<ProductionLine>]) -> Vec<OrderError> {
    let mut owners: HashMap<ProductId, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        for product in line.products() {
            match owners.get(&product.id()) {
                Some(&first) if first != index => duplicates.push(OrderError::CrossLineDuplicate {
                    id: product.id(),
                    first: lines[first].name().to_string(),
                    second: line.name().to_string(),
                }),
                Some(_) => {}
                None => {
                    owners.insert(product.id(), index);
                }
            }
        }
    }

    duplicates
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::PaymentMethod;
    use crate::domain::product::ProductStatus;

    fn relax() -> Product {
        Product::plain("boxer", ProductId(101), "L", "Blu", ProductStatus::Available)
    }

    fn active() -> Product {
        Product::plain("costume intero", ProductId(102), "S", "Rosso", ProductStatus::OutOfStock)
    }

    fn extreme() -> Product {
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

    fn kids() -> Product {
        Product::plain("boxer", ProductId(201), "5 anni", "Giallo", ProductStatus::Available)
    }

    fn new_kids() -> Product {
        Product::plain("slip", ProductId(202), "8 anni", "Verde", ProductStatus::Available)
    }

    fn ocean() -> ProductionLine {
        ProductionLine::new(
            "Linea Ocean",
            "Linea sostenibile di prodotti beachwear realizzati in plastica riciclata per adulti",
            vec![relax(), active(), extreme()],
        )
        .unwrap()
    }

    fn sea() -> ProductionLine {
        ProductionLine::new(
            "Linea Sea",
            "Linea sostenibile di prodotti beachwear per bambini",
            vec![kids()],
        )
        .unwrap()
    }

    fn manager() -> OrderManager {
        OrderManager::new(vec![ocean(), sea()])
    }

    fn luca() -> Arc<Customer> {
        Arc::new(Customer::new("Luca", "Rossi", "lucarossi@atleta.com", PaymentMethod::Card).unwrap())
    }

    #[test]
    fn test_order_round_trip() {
        let mut manager = manager();
        let customer = luca();
        let position_before = manager.lines()[0]
            .products()
            .iter()
            .position(|p| p.id() == ProductId(103));

        let outcome = manager.execute_order(&customer, &extreme());

        assert!(outcome.succeeded, "{}", outcome.message);
        assert_eq!(
            outcome.message,
            "[SUCCESSO] Ordine completato: il prodotto ID 103 è stato assegnato a Luca Rossi."
        );
        let receipt = outcome.data.unwrap();
        assert_eq!(receipt.product.status(), ProductStatus::Ordered);
        assert_eq!(receipt.product.assigned_customer(), Some(&customer));

        let ocean = manager.line("Linea Ocean").unwrap();
        let position_after = ocean.products().iter().position(|p| p.id() == ProductId(103));
        assert_eq!(position_before, position_after);
        assert_eq!(ocean.find(ProductId(103)), Some(&receipt.product));
        assert!(Arc::ptr_eq(&ocean, &receipt.line));
    }

    #[test]
    fn test_unregistered_product_rejected() {
        let mut manager = manager();
        let before = manager.summary();

        let outcome = manager.execute_order(&luca(), &new_kids());

        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.message,
            "[ERRORE RICERCA] Nessuna linea produttiva trovata per il prodotto ID 202."
        );
        assert_eq!(manager.summary(), before);
        assert!(manager.history().is_empty());
    }

    #[test]
    fn test_out_of_stock_rejected_without_changes() {
        let mut manager = manager();
        let lines_before = manager.lines();

        let outcome = manager.execute_order(&luca(), &active());

        assert!(!outcome.succeeded);
        assert_eq!(
            outcome.message,
            "[ERRORE DISPONIBILITÀ] Il prodotto ID 102 è esaurito o già assegnato."
        );
        let lines_after = manager.lines();
        assert!(lines_before.iter().zip(&lines_after).all(|(a, b)| Arc::ptr_eq(a, b)));
        assert!(manager.history().is_empty());
    }

    #[test]
    fn test_stale_snapshot_rejected() {
        let mut manager = manager();
        let stale = relax();

        assert!(manager.execute_order(&luca(), &stale).succeeded);
        let second = manager.execute_order(&luca(), &stale);

        assert!(!second.succeeded);
        assert!(second.message.starts_with("[ERRORE DISPONIBILITÀ] Il prodotto ID 101 risulta ordinato"));
        assert_eq!(manager.history().len(), 1);
    }

    #[test]
    fn test_ordering_the_assigned_snapshot_is_unavailable() {
        let mut manager = manager();
        let receipt = manager.execute_order(&luca(), &relax()).data.unwrap();

        let again = manager.execute_order(&luca(), &receipt.product);

        assert!(!again.succeeded);
        assert_eq!(
            again.message,
            "[ERRORE DISPONIBILITÀ] Il prodotto ID 101 è ordinato o già assegnato."
        );
    }

    #[test]
    fn test_add_product_to_line() {
        let mut manager = manager();

        let outcome = manager.add_product_to_line("Linea Sea", new_kids());

        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "[SUCCESSO] Prodotto ID: 202 messo in produzione.");
        let line = outcome.data.unwrap();
        assert!(Arc::ptr_eq(&line, &manager.line("Linea Sea").unwrap()));
        assert_eq!(
            manager.summary()[1],
            "Linea Sea: 2 prodotti presenti (ultimo ID: 202)."
        );
    }

    #[test]
    fn test_add_product_to_unknown_line() {
        let mut manager = manager();
        let outcome = manager.add_product_to_line("Linea Sky", new_kids());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "[ERRORE] La linea \"Linea Sky\" non esiste nel sistema.");
    }

    #[test]
    fn test_add_product_failure_propagates_delegate_message() {
        let mut manager = manager();
        let before = manager.lines();

        let outcome = manager.add_product_to_line("Linea Sea", kids());

        assert_eq!(outcome.message, "[DUPLICATO] Il prodotto ID 201 è già presente.");
        assert!(Arc::ptr_eq(&before[1], &manager.lines()[1]));
    }

    #[test]
    fn test_summary_with_empty_line() {
        let empty = ProductionLine::new("Linea Nuova", "", vec![]).unwrap();
        let manager = OrderManager::new(vec![empty]);
        assert_eq!(
            manager.summary(),
            vec!["Linea Nuova: 0 prodotti presenti (ultimo ID: Nessuno).".to_string()]
        );
    }

    #[test]
    fn test_lines_is_a_snapshot() {
        let mut manager = manager();
        let mut snapshot = manager.lines();
        snapshot.clear();

        assert_eq!(manager.lines().len(), 2);

        let held = manager.lines();
        manager.add_product_to_line("Linea Sea", new_kids());
        assert_eq!(held[1].len(), 1);
        assert_eq!(manager.lines()[1].len(), 2);
    }

    #[test]
    fn test_duplicate_line_names_replace_matched_line_only() {
        let first = sea();
        let second = ProductionLine::new("Linea Sea", "copia", vec![new_kids()]).unwrap();
        let mut manager = OrderManager::new(vec![first, second]);

        let outcome = manager.execute_order(&luca(), &new_kids());

        assert!(outcome.succeeded);
        let lines = manager.lines();
        assert_eq!(lines[0].find(ProductId(201)).unwrap().status(), ProductStatus::Available);
        assert_eq!(lines[1].find(ProductId(202)).unwrap().status(), ProductStatus::Ordered);
    }

    #[test]
    fn test_history_records_commits_in_order() {
        let mut manager = manager();
        let customer = luca();

        manager.add_product_to_line("Linea Sea", new_kids());
        manager.execute_order(&customer, &new_kids());
        manager.execute_order(&customer, &active());

        let history = manager.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence_number, 1);
        assert_eq!(history[0].event_type, "ProductAdded");
        assert_eq!(history[1].sequence_number, 2);
        assert_eq!(history[1].aggregate_id, manager.id());
        match &history[1].event_data {
            OrderEvent::ProductAssigned(e) => {
                assert_eq!(e.product_id, ProductId(202));
                assert_eq!(e.line_name, "Linea Sea");
                assert_eq!(e.customer_id, customer.id());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_cross_line_duplicates_tolerated_by_default() {
        let shadow = ProductionLine::new("Linea Ombra", "", vec![relax()]).unwrap();
        let mut manager = OrderManager::new(vec![ocean(), shadow]);

        let outcome = manager.execute_order(&luca(), &relax());

        assert!(outcome.succeeded);
        assert_eq!(outcome.data.unwrap().line.name(), "Linea Ocean");
    }

    #[test]
    fn test_strict_config_rejects_cross_line_duplicates() {
        let shadow = ProductionLine::new("Linea Ombra", "", vec![relax()]).unwrap();
        let config = ManagerConfig {
            reject_cross_line_duplicates: true,
        };

        let result = OrderManager::with_config(vec![ocean(), shadow], config);

        assert_eq!(
            result.unwrap_err(),
            OrderError::CrossLineDuplicate {
                id: ProductId(101),
                first: "Linea Ocean".to_string(),
                second: "Linea Ombra".to_string(),
            }
        );
    }

    #[test]
    fn test_strict_config_refuses_adding_id_of_other_line() {
        let config = ManagerConfig {
            reject_cross_line_duplicates: true,
        };
        let mut manager = OrderManager::with_config(vec![ocean(), sea()], config).unwrap();

        let outcome = manager.add_product_to_line("Linea Sea", relax());

        assert!(!outcome.succeeded);
        assert!(outcome.message.starts_with("[CONFLITTO ID] Il prodotto ID 101"));
        assert_eq!(manager.line("Linea Sea").unwrap().len(), 1);
    }
}
