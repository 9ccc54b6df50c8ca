use crate::domain::product::{ProductError, ProductId, ProductStatus};
use crate::domain::production_line::LineError;

// ============================================================================
// Order Orchestration Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("[ERRORE RICERCA] Nessuna linea produttiva trovata per il prodotto ID {0}.")]
    ProductNotRegistered(ProductId),

    #[error("[ERRORE] La linea \"{0}\" non esiste nel sistema.")]
    LineNotFound(String),

    /// The submitted product is an outdated snapshot of the registered one
    #[error("[ERRORE DISPONIBILITÀ] Il prodotto ID {id} risulta {current} nella linea \"{line}\": il riferimento usato non è aggiornato.")]
    StaleSnapshot {
        id: ProductId,
        current: ProductStatus,
        line: String,
    },

    #[error("[CONFLITTO ID] Il prodotto ID {id} compare sia nella linea \"{first}\" sia nella linea \"{second}\".")]
    CrossLineDuplicate {
        id: ProductId,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Line(#[from] LineError),
}
