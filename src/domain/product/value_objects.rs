use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ProductError;

// ============================================================================
// Product Value Objects
// ============================================================================

/// System-wide product number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ProductStatus {
    Available,
    Ordered,
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Available, Self::Ordered, Self::OutOfStock];

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "disponibile",
            ProductStatus::Ordered => "ordinato",
            ProductStatus::OutOfStock => "esaurito",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Ordered => "ordered",
            ProductStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductStatus {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == wanted || status.code() == wanted)
            .ok_or_else(|| ProductError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ProductStatus {
    type Error = ProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Variant-specific attributes
///
/// Every variant must survive an assignment unchanged: only status and owner
/// move between snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ProductVariant {
    Plain,
    Customized {
        customization_text: String,
        surcharge: f64,
    },
}

impl ProductVariant {
    pub fn is_customized(&self) -> bool {
        matches!(self, ProductVariant::Customized { .. })
    }

    pub fn surcharge(&self) -> f64 {
        match self {
            ProductVariant::Plain => 0.0,
            ProductVariant::Customized { surcharge, .. } => *surcharge,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
