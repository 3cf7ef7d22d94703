// =============================================================================
// ERROR — Les erreurs de la bibliothèque
// =============================================================================
//
// Le cœur reste volontairement "non vérifié" comme les exemples d'origine :
// un fold qui déborde déborde. Les seules erreurs exposées sont :
//   - les variantes `checked_*` des folds (débordement détecté)
//   - la sélection d'un sink ou d'un fold par son nom (CLI / config)
//   - le chargement de la configuration
//
// =============================================================================

use thiserror::Error;

/// Erreur de la bibliothèque fpidioms.
#[derive(Debug, Error)]
pub enum Error {
    /// Un fold vérifié a débordé sur `i64`.
    #[error("overflow in {operation} for n = {n}")]
    Overflow { operation: &'static str, n: u32 },

    /// Le calculateur déborderait pour cette entrée.
    #[error("calculator overflow for input {input}")]
    CalculatorOverflow { input: i64 },

    /// Un MemorySink construit par nom serait illisible une fois en boîte.
    #[error("the memory sink cannot be built by name; create a MemorySink and keep it")]
    DetachedMemorySink,

    /// Nom de sink inconnu (attendu : stdout, tracing, memory).
    #[error("unknown trace sink '{0}' (expected stdout, tracing or memory)")]
    UnknownSink(String),

    /// Nom de fold inconnu.
    #[error("unknown fold '{0}'")]
    UnknownFold(String),

    /// Configuration illisible ou mal typée.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

/// Alias pratique pour les résultats de la bibliothèque.
pub type Result<T> = std::result::Result<T, Error>;
