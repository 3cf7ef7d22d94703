// =============================================================================
// CORE — Les deux fragments pédagogiques
// =============================================================================
//
// Aucun des deux ne dépend de l'autre.
//
// Architecture :
//   calculator → le trait Calculator, AddingCalculator, LoggingCalculator,
//                FnCalculator (polymorphisme + décorateur)
//   trace      → où le décorateur écrit ses lignes (stdout, tracing, mémoire)
//   function   → les fonctions comme valeurs (square, exec_function, compose)
//   sequence   → map / filter / fold sur [1, n]
//
// =============================================================================

pub mod calculator;
pub mod function;
pub mod sequence;
pub mod trace;
