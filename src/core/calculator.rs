// =============================================================================
// CALCULATOR — Polymorphisme par interface et décorateur
// =============================================================================
//
// Une "capacité" à une seule opération : calculate(input) -> output.
//
//   AddingCalculator  → x + 1
//   LoggingCalculator → enveloppe un autre Calculator, trace l'entrée,
//                       délègue, trace le résultat, rend le résultat
//   FnCalculator      → une simple valeur-fonction vue comme un Calculator
//
// LE DÉCORATEUR :
//   LoggingCalculator(AddingCalculator).calculate(5)
//     émet  "input is 5"
//     calcule AddingCalculator.calculate(5) = 6
//     émet  "result is 6"
//     rend  6
//
// L'ordre des deux lignes est garanti. Aucune autre émission.
//
// FnCalculator montre l'autre manière de faire : au lieu d'un trait et d'un
// type par variante, on stocke directement une fonction `Fn(T) -> T`.
//
// =============================================================================

use std::cell::RefCell;
use std::fmt;

use num_traits::{PrimInt, Signed};
use tracing::debug;

use super::trace::{StdoutSink, TraceSink};
use crate::error::Error;

/// La capacité "calculateur" : une transformation entier → entier.
pub trait Calculator<T> {
    fn calculate(&self, input: T) -> T;
}

impl<T, C: Calculator<T> + ?Sized> Calculator<T> for &C {
    #[inline]
    fn calculate(&self, input: T) -> T {
        (**self).calculate(input)
    }
}

impl<T, C: Calculator<T> + ?Sized> Calculator<T> for Box<C> {
    #[inline]
    fn calculate(&self, input: T) -> T {
        (**self).calculate(input)
    }
}

/// Ajoute 1 à l'entrée. Le débordement suit la sémantique des entiers
/// primitifs (panique en debug).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddingCalculator;

impl<T> Calculator<T> for AddingCalculator
where
    T: PrimInt + Signed,
{
    #[inline]
    fn calculate(&self, input: T) -> T {
        input + T::one()
    }
}

impl AddingCalculator {
    /// Comme `calculate`, mais signale le débordement au lieu de paniquer.
    pub fn try_calculate<T>(self, input: T) -> crate::Result<T>
    where
        T: PrimInt + Signed + Into<i64>,
    {
        input
            .checked_add(&T::one())
            .ok_or_else(|| Error::CalculatorOverflow {
                input: input.into(),
            })
    }
}

/// Décorateur qui trace l'entrée et le résultat autour de la délégation.
///
/// Possède le calculateur enveloppé et le sink pendant toute sa durée de vie.
/// Le sink est dans un `RefCell` : `emit` demande `&mut`, alors que
/// `calculate` ne prend que `&self`.
pub struct LoggingCalculator<C, S = StdoutSink> {
    inner: C,
    sink: RefCell<S>,
}

impl<C> LoggingCalculator<C, StdoutSink> {
    /// Décorateur qui écrit sur la console (comportement d'origine).
    pub fn stdout(inner: C) -> Self {
        Self::new(inner, StdoutSink)
    }
}

impl<C, S> LoggingCalculator<C, S> {
    pub fn new(inner: C, sink: S) -> Self {
        Self {
            inner,
            sink: RefCell::new(sink),
        }
    }

    /// Le calculateur enveloppé
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Accès au sink, par exemple pour lire un `MemorySink`.
    pub fn sink(&self) -> std::cell::Ref<'_, S> {
        self.sink.borrow()
    }

    /// Défait le décorateur.
    pub fn into_parts(self) -> (C, S) {
        (self.inner, self.sink.into_inner())
    }
}

impl<T, C, S> Calculator<T> for LoggingCalculator<C, S>
where
    T: fmt::Display,
    C: Calculator<T>,
    S: TraceSink,
{
    fn calculate(&self, input: T) -> T {
        debug!(%input, "delegating to wrapped calculator");
        self.sink.borrow_mut().emit(&format!("input is {}", input));
        let result = self.inner.calculate(input);
        self.sink.borrow_mut().emit(&format!("result is {}", result));
        debug!(%result, "wrapped calculator returned");
        result
    }
}

impl<C: fmt::Debug, S> fmt::Debug for LoggingCalculator<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingCalculator")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Une valeur-fonction utilisée comme calculateur.
#[derive(Clone, Copy)]
pub struct FnCalculator<F> {
    f: F,
}

impl<F> FnCalculator<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Calculator<T> for FnCalculator<F>
where
    F: Fn(T) -> T,
{
    #[inline]
    fn calculate(&self, input: T) -> T {
        (self.f)(input)
    }
}

impl<F> fmt::Debug for FnCalculator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCalculator(..)")
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::function::{adding, square};
    use crate::core::trace::MemorySink;

    #[test]
    fn test_adding_calculator() {
        assert_eq!(AddingCalculator.calculate(5_i32), 6);
        assert_eq!(AddingCalculator.calculate(-1_i64), 0);
    }

    #[test]
    fn test_adding_calculator_try_calculate() {
        assert_eq!(AddingCalculator.try_calculate(5_i32).unwrap(), 6);
        assert!(matches!(
            AddingCalculator.try_calculate(i32::MAX),
            Err(Error::CalculatorOverflow { input }) if input == i64::from(i32::MAX)
        ));
    }

    #[test]
    fn test_logging_calculator_traces_in_order() {
        let calc = LoggingCalculator::new(AddingCalculator, MemorySink::new());
        assert_eq!(calc.calculate(5_i32), 6);
        assert_eq!(calc.sink().lines(), ["input is 5", "result is 6"]);
    }

    #[test]
    fn test_logging_calculator_stdout() {
        let calc = LoggingCalculator::stdout(AddingCalculator);
        assert_eq!(*calc.inner(), AddingCalculator);
        assert_eq!(calc.calculate(5_i64), 6);
    }

    #[test]
    fn test_logging_calculator_two_lines_per_call() {
        let calc = LoggingCalculator::new(AddingCalculator, MemorySink::new());
        calc.calculate(1_i32);
        calc.calculate(10_i32);
        let (_, sink) = calc.into_parts();
        assert_eq!(
            sink.lines(),
            ["input is 1", "result is 2", "input is 10", "result is 11"]
        );
    }

    #[test]
    fn test_logging_calculator_borrowed_sink() {
        let mut sink = MemorySink::new();
        {
            let calc = LoggingCalculator::new(AddingCalculator, &mut sink);
            assert_eq!(calc.calculate(-3_i32), -2);
        }
        assert_eq!(sink.lines(), ["input is -3", "result is -2"]);
    }

    #[test]
    fn test_logging_calculator_over_trait_object() {
        let inner: Box<dyn Calculator<i32>> = Box::new(AddingCalculator);
        let calc = LoggingCalculator::new(inner, MemorySink::new());
        assert_eq!(calc.calculate(41), 42);
        assert_eq!(calc.sink().len(), 2);
    }

    #[test]
    fn test_nested_decorators() {
        let inner = LoggingCalculator::new(AddingCalculator, MemorySink::new());
        let outer = LoggingCalculator::new(&inner, MemorySink::new());
        assert_eq!(outer.calculate(0_i32), 1);
        assert_eq!(outer.sink().lines(), ["input is 0", "result is 1"]);
        assert_eq!(inner.sink().lines(), ["input is 0", "result is 1"]);
    }

    #[test]
    fn test_fn_calculator() {
        let calc = FnCalculator::new(adding::<i32>);
        assert_eq!(calc.calculate(5), 6);

        let offset = 100_i64;
        let calc = FnCalculator::new(move |x: i64| x + offset);
        assert_eq!(calc.calculate(1), 101);
    }

    #[test]
    fn test_logging_calculator_non_copy_values() {
        let shout = FnCalculator::new(|s: String| s.to_uppercase());
        let calc = LoggingCalculator::new(shout, MemorySink::new());
        assert_eq!(calc.calculate("hi".to_string()), "HI");
        assert_eq!(calc.sink().lines(), ["input is hi", "result is HI"]);
    }

    #[test]
    fn test_logging_calculator_debug_events() {
        use crate::core::trace::tests::SharedBuf;

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let calc = LoggingCalculator::new(AddingCalculator, MemorySink::new());
            assert_eq!(calc.calculate(5_i32), 6);
        });

        let out = buf.contents();
        assert!(out.contains("delegating to wrapped calculator"));
        assert!(out.contains("wrapped calculator returned"));
    }

    #[test]
    fn test_fn_calculator_behind_decorator() {
        let calc = LoggingCalculator::new(FnCalculator::new(square::<i32>), MemorySink::new());
        assert_eq!(calc.calculate(12), 144);
        assert_eq!(calc.sink().lines(), ["input is 12", "result is 144"]);
    }

    #[test]
    fn test_calculators_as_trait_objects() {
        let calcs: Vec<Box<dyn Calculator<i32>>> = vec![
            Box::new(AddingCalculator),
            Box::new(FnCalculator::new(square::<i32>)),
        ];
        let results: Vec<i32> = calcs.iter().map(|c| c.calculate(3)).collect();
        assert_eq!(results, vec![4, 9]);
    }
}
