use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::domain::product::{Product, ProductId, ProductStatus};
use crate::domain::production_line::ProductionLine;

// ============================================================================
// Catalog - Seed Data Loader
// ============================================================================
//
// JSON records are plain DTOs; every record goes through the domain
// constructors, so a catalog that loads is a catalog that satisfies the
// domain rules (valid emails, known statuses, no duplicate ids in a line).
//
// ============================================================================

const SAMPLE_CATALOG: &str = include_str!("../demos/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    lines: Vec<LineRecord>,
    #[serde(default)]
    customers: Vec<CustomerRecord>,
}

#[derive(Debug, Deserialize)]
struct LineRecord {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    kind: String,
    id: u64,
    size: String,
    color: String,
    status: String,
    #[serde(default)]
    customization: Option<CustomizationRecord>,
}

#[derive(Debug, Deserialize)]
struct CustomizationRecord {
    text: String,
    surcharge: f64,
}

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    first_name: String,
    last_name: String,
    email: String,
    payment_method: String,
}

/// Production lines and customers ready to hand to an `OrderManager`
#[derive(Debug, Clone)]
pub struct Catalog {
    pub lines: Vec<ProductionLine>,
    pub customers: Vec<Arc<Customer>>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("Malformed catalog JSON")?;

        let lines = file
            .lines
            .into_iter()
            .map(LineRecord::into_line)
            .collect::<Result<Vec<_>>>()?;

        let customers = file
            .customers
            .into_iter()
            .map(|record| record.into_customer().map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            lines = lines.len(),
            customers = customers.len(),
            "Catalog parsed"
        );

        Ok(Self { lines, customers })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;

        Self::from_json(&json).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    /// The bundled beachwear catalog
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn customer(&self, email: &str) -> Option<&Arc<Customer>> {
        self.customers.iter().find(|c| c.email().as_str() == email)
    }
}

impl LineRecord {
    fn into_line(self) -> Result<ProductionLine> {
        let products = self
            .products
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid product in line {:?}", self.name))?;

        ProductionLine::new(self.name.clone(), self.description, products)
            .with_context(|| format!("Invalid line {:?}", self.name))
    }
}

impl ProductRecord {
    fn into_product(self) -> Result<Product> {
        let id = ProductId(self.id);
        let status: ProductStatus = self
            .status
            .parse()
            .with_context(|| format!("Product {id}"))?;

        let product = match self.customization {
            None => Product::plain(self.kind, id, self.size, self.color, status),
            Some(custom) => Product::customized(
                self.kind,
                id,
                self.size,
                self.color,
                status,
                custom.text,
                custom.surcharge,
            )?,
        };

        Ok(product)
    }
}

impl CustomerRecord {
    fn into_customer(self) -> Result<Customer> {
        Customer::parse(
            self.first_name.as_str(),
            self.last_name.as_str(),
            &self.email,
            &self.payment_method,
        )
        .with_context(|| format!("Invalid customer {} {}", self.first_name, self.last_name))
    }
}
