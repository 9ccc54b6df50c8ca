use super::value_objects::{ProductId, ProductStatus};

// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("[ERRORE DISPONIBILITÀ] Il prodotto ID {id} è {status} o già assegnato.")]
    Unavailable { id: ProductId, status: ProductStatus },

    #[error("[ERRORE STATO] Un prodotto assegnato deve risultare ordinato, non {0}.")]
    InvalidAssignmentStatus(ProductStatus),

    #[error("[ERRORE STATO] Stato prodotto non riconosciuto: {0:?}.")]
    UnknownStatus(String),

    #[error("[ERRORE VALIDAZIONE] Sovrapprezzo non valido per il prodotto ID {id}: {surcharge}.")]
    InvalidSurcharge { id: ProductId, surcharge: f64 },
}
