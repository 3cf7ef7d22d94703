// =============================================================================
// FUNCTION — Les fonctions comme valeurs
// =============================================================================
//
// Une fonction est une valeur comme une autre : on peut la nommer, la copier
// dans une variable, la passer en argument à une autre fonction.
//
//   let square_clone = square;          // une fonction dans une variable
//   exec_function(square_clone, 12)     // une fonction en argument → 144
//
// Ces fonctions alimentent aussi les folds de `sequence` (map avec `square`).
//
// =============================================================================

use num_traits::PrimInt;

/// x²
#[inline]
pub fn square<T: PrimInt>(x: T) -> T {
    x * x
}

/// x + 1, la version "fonction" d'AddingCalculator.
#[inline]
pub fn adding<T: PrimInt>(x: T) -> T {
    x + T::one()
}

/// Applique `f` à `param`.
///
/// La fonction de plus haut niveau la plus simple possible : elle ne fait
/// rien d'autre qu'appeler la valeur-fonction qu'on lui donne.
#[inline]
pub fn exec_function<T, F>(f: F, param: T) -> T
where
    F: FnOnce(T) -> T,
{
    f(param)
}

/// Compose deux fonctions : `compose(f, g)(x) = g(f(x))`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(square(2_i32), 4);
        assert_eq!(square(3_i32), 9);
        assert_eq!(square(4_i32), 16);
        assert_eq!(square(-7_i64), 49);
    }

    #[test]
    fn test_function_in_variable() {
        let square_clone: fn(i32) -> i32 = square;
        assert_eq!(exec_function(square_clone, 12), 144);
    }

    #[test]
    fn test_exec_function_with_closure() {
        let base = 10;
        assert_eq!(exec_function(|x: i32| x * base, 4), 40);
    }

    #[test]
    fn test_compose() {
        let add_then_square = compose(adding::<i32>, square::<i32>);
        assert_eq!(add_then_square(2), 9);

        let square_then_add = compose(square::<i32>, adding::<i32>);
        assert_eq!(square_then_add(2), 5);
    }
}
