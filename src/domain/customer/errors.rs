// ============================================================================
// Customer Validation Errors
// ============================================================================
//
// Raised only while building a Customer; an existing Customer is always valid.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomerError {
    #[error("[ERRORE VALIDAZIONE] L'email non è nel formato corretto: {0:?}.")]
    InvalidEmail(String),

    #[error("[ERRORE VALIDAZIONE] Metodo di pagamento non supportato: {0:?}.")]
    UnsupportedPaymentMethod(String),
}
