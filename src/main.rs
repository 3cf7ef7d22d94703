// =============================================================================
// FPIDIOMS — Point d'entrée : démonstration des idiomes
// =============================================================================
//
// Sous-commandes :
//   demo               → tout l'enchaînement, étape par étape
//   calculate <INPUT>  → LoggingCalculator(AddingCalculator).calculate(INPUT)
//   fold <FOLD> [N]    → un seul fold sur [1, N]
//   folds [N]          → tous les folds sur [1, N]
//
// Les valeurs absentes de la ligne de commande viennent de la configuration
// (fpidioms.toml + FPIDIOMS_*).
//
// Les nombres tapés par l'utilisateur passent par les variantes vérifiées :
// un débordement devient une erreur, jamais une panique.
//
// =============================================================================

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use fpidioms::config::{Settings, DEFAULT_CONFIG_FILE};
use fpidioms::core::calculator::{AddingCalculator, Calculator, FnCalculator, LoggingCalculator};
use fpidioms::core::function::{adding, compose, exec_function, square};
use fpidioms::core::sequence::{self, Fold};
use fpidioms::core::trace::{MemorySink, SinkKind};
use fpidioms::Error;
use fpidioms::logging;

#[derive(Parser, Debug)]
#[command(name = "fpidioms", version, about = "Idiomes objet et fonctionnels : calculateurs et folds")]
struct Cli {
    /// Fichier de configuration (TOML)
    #[arg(long, global = true, env = "FPIDIOMS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Déroule toute la démonstration
    Demo,

    /// Passe une valeur dans LoggingCalculator(AddingCalculator)
    Calculate {
        /// Entrée du calculateur (défaut : demo.input)
        #[arg(allow_negative_numbers = true)]
        input: Option<i32>,

        /// Destination des traces : stdout, tracing ou memory
        #[arg(long, value_parser = parse_sink)]
        sink: Option<SinkKind>,

        /// Appelle AddingCalculator sans décorateur
        #[arg(long)]
        no_log: bool,
    },

    /// Applique un fold sur [1, N]
    Fold {
        /// sum-of-squares, product, sum-of-odds, alternating-sum, alternating-sum2
        #[arg(value_parser = parse_fold)]
        fold: Fold,

        /// Borne de l'intervalle (défaut : demo.n)
        n: Option<u32>,
    },

    /// Applique tous les folds sur [1, N]
    Folds {
        /// Borne de l'intervalle (défaut : demo.n)
        n: Option<u32>,
    },
}

fn parse_sink(s: &str) -> Result<SinkKind, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_fold(s: &str) -> Result<Fold, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_from(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    logging::init_with_config(&settings.logging);
    tracing::debug!(?settings, "configuration loaded");

    match cli.command {
        Command::Demo => run_demo(&settings)?,
        Command::Calculate { input, sink, no_log } => {
            let input = input.unwrap_or(settings.demo.input);
            let sink = sink.unwrap_or(settings.demo.sink);
            println!("{}", run_calculate(input, sink, no_log)?);
        }
        Command::Fold { fold, n } => {
            let n = n.unwrap_or(settings.demo.n);
            println!("{}", fold.try_apply(n)?);
        }
        Command::Folds { n } => {
            let n = n.unwrap_or(settings.demo.n);
            for (fold, value) in fold_table(n)? {
                println!("{:<17} {}", fold.name(), value);
            }
        }
    }

    Ok(())
}

/// Tous les folds sur [1, n], ou la première erreur de débordement.
fn fold_table(n: u32) -> fpidioms::Result<Vec<(Fold, i64)>> {
    Fold::ALL
        .into_iter()
        .map(|fold| fold.try_apply(n).map(|value| (fold, value)))
        .collect()
}

/// Calcule avec ou sans décorateur et rend le résultat. Un sink mémoire est
/// vidé sur stdout à la fin, ce qui montre que les deux lignes arrivent dans
/// l'ordre.
fn run_calculate(input: i32, sink: SinkKind, no_log: bool) -> anyhow::Result<i32> {
    // Le décorateur ne sait pas échouer : l'entrée est vérifiée avant
    let checked = AddingCalculator.try_calculate(input)?;
    if no_log {
        return Ok(checked);
    }

    let result = match sink {
        SinkKind::Memory => {
            let calc = LoggingCalculator::new(AddingCalculator, MemorySink::new());
            let result = calc.calculate(input);
            let (_, mut sink) = calc.into_parts();
            for line in sink.take() {
                println!("[memory] {}", line);
            }
            result
        }
        other => LoggingCalculator::new(AddingCalculator, other.build()?).calculate(input),
    };
    Ok(result)
}

fn run_demo(settings: &Settings) -> anyhow::Result<()> {
    let n = settings.demo.n;
    let input = settings.demo.input;
    // square et AddingCalculator reçoivent tous deux l'entrée configurée
    input
        .checked_mul(input)
        .ok_or(Error::CalculatorOverflow { input: i64::from(input) })?;
    AddingCalculator.try_calculate(input)?;

    println!("═══ ÉTAPE 1 : Polymorphisme par interface ═══\n");

    let calculators: Vec<(&str, Box<dyn Calculator<i32>>)> = vec![
        ("AddingCalculator", Box::new(AddingCalculator) as Box<dyn Calculator<i32>>),
        ("FnCalculator(adding)", Box::new(FnCalculator::new(adding::<i32>)) as Box<dyn Calculator<i32>>),
        ("FnCalculator(square)", Box::new(FnCalculator::new(square::<i32>)) as Box<dyn Calculator<i32>>),
    ];
    for (name, calc) in &calculators {
        println!("{:<22} calculate({}) = {}", name, input, calc.calculate(input));
    }

    println!("\n═══ ÉTAPE 2 : Décorateur LoggingCalculator ═══\n");

    println!("→ {}", run_calculate(input, settings.demo.sink, false)?);

    println!("\n═══ ÉTAPE 3 : Fonctions comme valeurs ═══\n");

    println!("square(2) = {}, square(3) = {}, square(4) = {}", square(2), square(3), square(4));
    let square_clone: fn(i32) -> i32 = square;
    println!("exec_function(square_clone, 12) = {}", exec_function(square_clone, 12));
    let add_then_square = compose(adding::<i32>, square::<i32>);
    println!("compose(adding, square)(2) = {}", add_then_square(2));

    println!("\n═══ ÉTAPE 4 : map / filter / fold sur [1, n] ═══\n");

    println!("sum_of_squares(100) = {}", sequence::sum_of_squares(100));
    for (fold, value) in fold_table(n)? {
        println!("{}({}) = {}", fold.name(), n, value);
    }
    // 21! ne tient plus dans un i64
    for bound in [n, 21] {
        match sequence::checked_product(bound) {
            Ok(value) => println!("checked_product({}) = {}", bound, value),
            Err(e) => println!("checked_product({}) : {}", bound, e),
        }
    }

    println!("\n═══════════════════════════════════════════════════");
    println!(
        "alternating_sum et alternating_sum2 concordent : {}",
        sequence::alternating_sum(n) == sequence::alternating_sum2(n)
    );
    println!("═══════════════════════════════════════════════════");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_table_small_n() {
        let table = fold_table(10).unwrap();
        let values: Vec<i64> = table.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![385, 3628800, 25, 5, 5]);
    }

    #[test]
    fn test_fold_table_reports_overflow() {
        assert!(matches!(
            fold_table(30),
            Err(Error::Overflow { operation: "product", n: 30 })
        ));
    }

    #[test]
    fn test_single_fold_overflow_is_an_error() {
        assert!(Fold::Product.try_apply(25).is_err());
    }

    #[test]
    fn test_run_calculate_memory_sink() {
        assert_eq!(run_calculate(5, SinkKind::Memory, false).unwrap(), 6);
        assert_eq!(run_calculate(5, SinkKind::Tracing, false).unwrap(), 6);
        assert_eq!(run_calculate(-1, SinkKind::Memory, true).unwrap(), 0);
    }

    #[test]
    fn test_run_calculate_rejects_max_input() {
        for no_log in [false, true] {
            let err = run_calculate(i32::MAX, SinkKind::Memory, no_log).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::CalculatorOverflow { .. })
            ));
        }
    }

    #[test]
    fn test_run_demo_reports_overflow() {
        let mut settings = Settings::default();
        settings.demo.sink = SinkKind::Memory;
        assert!(run_demo(&settings).is_ok());

        settings.demo.n = 25;
        assert!(run_demo(&settings).is_err());

        settings.demo.n = 10;
        settings.demo.input = i32::MAX;
        assert!(run_demo(&settings).is_err());
    }
}
