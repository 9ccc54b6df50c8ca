use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::domain::production_line::ProductionLine;

// ============================================================================
// Metrics Module - Prometheus metrics for the order workflow
// ============================================================================
//
// Provides:
// - Order attempts by outcome
// - Product insertions by outcome
// - Current product count per production line
//
// The registry is in-process only; `encode` renders the text exposition
// format for whoever wants to print or ship it.
// ============================================================================

const SUCCESS: &str = "success";
const FAILURE: &str = "failure";

/// Central metrics registry for the order workflow
pub struct Metrics {
    registry: Registry,

    pub orders_total: IntCounterVec,
    pub products_added_total: IntCounterVec,
    pub line_products: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_total = IntCounterVec::new(
            Opts::new("orders_total", "Order attempts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(orders_total.clone()))?;

        let products_added_total = IntCounterVec::new(
            Opts::new("products_added_total", "Product insertions into lines by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(products_added_total.clone()))?;

        let line_products = IntGaugeVec::new(
            Opts::new("line_products", "Products currently registered per production line"),
            &["line"],
        )?;
        registry.register(Box::new(line_products.clone()))?;

        Ok(Self {
            registry,
            orders_total,
            products_added_total,
            line_products,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order(&self, success: bool) {
        self.orders_total.with_label_values(&[outcome_label(success)]).inc();
    }

    pub fn record_product_added(&self, success: bool) {
        self.products_added_total.with_label_values(&[outcome_label(success)]).inc();
    }

    /// Refresh the per-line gauge from a manager snapshot
    pub fn update_line_sizes(&self, lines: &[Arc<ProductionLine>]) {
        for line in lines {
            self.line_products
                .with_label_values(&[line.name()])
                .set(line.len() as i64);
        }
    }

    /// Text exposition of every registered metric
    pub fn encode(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

fn outcome_label(success: bool) -> &'static str {
    if success { SUCCESS } else { FAILURE }
}
