use serde::Serialize;
use std::sync::Arc;

use super::commands::OrderCommand;
use super::manager::{OrderManager, OrderReceipt};
use crate::domain::production_line::ProductionLine;
use crate::metrics::Metrics;
use crate::outcome::Outcome;

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Command → OrderManager → Outcome → logs + metrics
//
// ============================================================================

/// Payload of a successful command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum OrderReply {
    Placed(OrderReceipt),
    Added(Arc<ProductionLine>),
}

pub struct OrderCommandHandler {
    manager: OrderManager,
    metrics: Arc<Metrics>,
}

impl OrderCommandHandler {
    pub fn new(manager: OrderManager, metrics: Arc<Metrics>) -> Self {
        metrics.update_line_sizes(&manager.lines());
        Self { manager, metrics }
    }

    pub fn manager(&self) -> &OrderManager {
        &self.manager
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn into_manager(self) -> OrderManager {
        self.manager
    }

    /// Run a command against the manager and record its outcome
    pub fn handle(&mut self, command: OrderCommand) -> Outcome<OrderReply> {
        let command_name = command.name();

        let outcome = match command {
            OrderCommand::PlaceOrder { customer, product } => {
                let outcome = self.manager.execute_order(&customer, &product);
                self.metrics.record_order(outcome.succeeded);
                outcome.map(OrderReply::Placed)
            }
            OrderCommand::AddProduct { line_name, product } => {
                let outcome = self.manager.add_product_to_line(&line_name, product);
                self.metrics.record_product_added(outcome.succeeded);
                outcome.map(OrderReply::Added)
            }
        };

        if outcome.succeeded {
            self.metrics.update_line_sizes(&self.manager.lines());
            tracing::info!(command = command_name, message = %outcome.message, "Command handled");
        } else {
            tracing::warn!(command = command_name, message = %outcome.message, "Command rejected");
        }

        outcome
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
