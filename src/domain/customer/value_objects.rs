use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer identity, assigned once at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer email address
///
/// Only built through [`Email::parse`]: at least one character must sit on
/// each side of the first `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(email: impl Into<String>) -> Result<Self, CustomerError> {
        let email = email.into();
        match email.find('@') {
            Some(at) if at > 0 && at + 1 < email.len() => Ok(Self(email)),
            _ => Err(CustomerError::InvalidEmail(email)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = CustomerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PaymentMethod {
    Cash,
    Card,
    DebitCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Card, Self::DebitCard];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "contanti",
            PaymentMethod::Card => "carta di credito",
            PaymentMethod::DebitCard => "bancomat",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::DebitCard => "debit_card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| method.label() == wanted || method.code() == wanted)
            .ok_or_else(|| CustomerError::UnsupportedPaymentMethod(s.to_string()))
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = CustomerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_local_and_domain_part() {
        assert!(Email::parse("a@b").is_ok());
        assert!(Email::parse("dbianchi@mail.com").is_ok());

        for bad in ["no-at-sign", "@b", "a@", "@", ""] {
            let result = Email::parse(bad);
            assert!(
                matches!(result, Err(CustomerError::InvalidEmail(ref e)) if e == bad),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_email_only_checks_first_at_sign() {
        // "a@@" has a local part and a character after the first '@'
        assert!(Email::parse("a@@").is_ok());
    }

    #[test]
    fn test_email_deserialization_validates() {
        let ok: Email = serde_json::from_str("\"x@y.it\"").unwrap();
        assert_eq!(ok.as_str(), "x@y.it");

        let bad: Result<Email, _> = serde_json::from_str("\"iam.ironman\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_payment_method_parses_labels_and_codes() {
        assert_eq!("contanti".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("Carta di credito".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("debit_card".parse::<PaymentMethod>().unwrap(), PaymentMethod::DebitCard);
        assert_eq!(" BANCOMAT ".parse::<PaymentMethod>().unwrap(), PaymentMethod::DebitCard);
    }

    #[test]
    fn test_unknown_payment_method_rejected() {
        let result = "bitcoin".parse::<PaymentMethod>();
        assert!(matches!(result, Err(CustomerError::UnsupportedPaymentMethod(ref m)) if m == "bitcoin"));
    }

    #[test]
    fn test_payment_method_serialization_roundtrips_through_code() {
        let json = serde_json::to_string(&PaymentMethod::DebitCard).unwrap();
        assert_eq!(json, "\"debit_card\"");
        let back: PaymentMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaymentMethod::DebitCard);
    }
}
