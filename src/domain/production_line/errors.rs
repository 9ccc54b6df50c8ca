use crate::domain::product::ProductId;

// ============================================================================
// Production Line Membership Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("[ERRORE AGGIORNAMENTO] Prodotto ID {0} non trovato in questa linea.")]
    ProductNotFound(ProductId),

    /// Same id, same fields: the product was submitted twice
    #[error("[DUPLICATO] Il prodotto ID {0} è già presente.")]
    Duplicate(ProductId),

    /// Same id, different fields: most likely a typo in the id
    #[error("[CONFLITTO ID] L'ID {0} è già assegnato ad un altro prodotto.")]
    IdConflict(ProductId),
}
