// =============================================================================
// FPIDIOMS — Idiomes objet et fonctionnels en Rust
// =============================================================================
//
// Deux petits fragments indépendants, écrits comme support pédagogique :
//
//   1. Le polymorphisme par interface : un trait Calculator à une seule
//      méthode, une implémentation de base (AddingCalculator) et un
//      décorateur qui trace entrée et résultat (LoggingCalculator).
//
//   2. Les fonctions comme valeurs et les folds : square, exec_function,
//      puis map / filter / fold sur l'intervalle [1, n].
//
// Architecture :
//   core/     → les deux fragments (calculator, trace, function, sequence)
//   config    → configuration en couches (défauts, TOML, environnement)
//   logging   → initialisation de tracing
//   error     → le type d'erreur de la bibliothèque
//
// =============================================================================

pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
