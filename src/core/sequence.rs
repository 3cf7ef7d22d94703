// =============================================================================
// SEQUENCE — map / filter / reduce sur l'intervalle [1, n]
// =============================================================================
//
// Chaque fonction part de la même séquence `range(n)` = 1, 2, ..., n et la
// réduit à une seule valeur :
//
//   sum_of_squares(n)   = map(square) puis sum          Σ i²
//   product(n)          = fold avec la graine 1         Π i
//   sum_of_odds(n)      = filter(impair) puis sum       Σ i impair
//   alternating_sum(n)  = map indexé puis sum           -1 + 2 - 3 + 4 ...
//   alternating_sum2(n) = fold avec un accumulateur (bascule, somme)
//
// `n` est un NOMBRE d'éléments (u32) : un intervalle "négatif" n'est pas
// représentable, et n = 0 donne la séquence vide (somme 0, produit 1).
//
// Les folds simples ne vérifient pas le débordement. Les variantes
// `checked_*` le signalent par une erreur.
//
// =============================================================================

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::function::square;
use crate::error::Error;

/// La séquence 1, 2, ..., n.
pub fn range(n: u32) -> impl Iterator<Item = i64> + Clone {
    1..=i64::from(n)
}

/// Σ i² pour i dans [1, n]
pub fn sum_of_squares(n: u32) -> i64 {
    range(n).map(square).sum()
}

/// Π i pour i dans [1, n] (graine 1, donc product(0) = 1)
pub fn product(n: u32) -> i64 {
    range(n).fold(1, |acc, val| acc * val)
}

/// Σ i pour les i impairs de [1, n]
pub fn sum_of_odds(n: u32) -> i64 {
    range(n).filter(|x| x % 2 == 1).sum()
}

/// Somme alternée : l'élément d'indice (base 0) pair est négatif.
///
/// `alternating_sum(10) = -1 + 2 - 3 + 4 - 5 + 6 - 7 + 8 - 9 + 10 = 5`
/// (cinq paires valant 1 chacune).
pub fn alternating_sum(n: u32) -> i64 {
    range(n)
        .enumerate()
        .map(|(i, x)| if i % 2 == 0 { -x } else { x })
        .sum()
}

/// L'accumulateur de `alternating_sum2` : la bascule et la somme courante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternatingAcc {
    /// Le prochain élément doit-il être soustrait ?
    pub negate_next: bool,
    pub sum: i64,
}

impl AlternatingAcc {
    /// Graine du fold : on commence par soustraire.
    pub const SEED: AlternatingAcc = AlternatingAcc {
        negate_next: true,
        sum: 0,
    };

    /// Une étape du fold : ajoute ou soustrait `x`, puis bascule.
    #[inline]
    pub fn step(self, x: i64) -> Self {
        if self.negate_next {
            AlternatingAcc {
                negate_next: false,
                sum: self.sum - x,
            }
        } else {
            AlternatingAcc {
                negate_next: true,
                sum: self.sum + x,
            }
        }
    }
}

impl Default for AlternatingAcc {
    fn default() -> Self {
        Self::SEED
    }
}

/// Même résultat qu'`alternating_sum`, calculé par un fold gauche qui
/// transporte un `AlternatingAcc`.
pub fn alternating_sum2(n: u32) -> i64 {
    range(n).fold(AlternatingAcc::SEED, AlternatingAcc::step).sum
}

/// `sum_of_squares` qui signale le débordement.
pub fn checked_sum_of_squares(n: u32) -> crate::Result<i64> {
    range(n)
        .try_fold(0_i64, |acc, x| {
            x.checked_mul(x).and_then(|sq| acc.checked_add(sq))
        })
        .ok_or(Error::Overflow {
            operation: "sum_of_squares",
            n,
        })
}

/// `product` qui signale le débordement (dès n = 21 sur i64).
pub fn checked_product(n: u32) -> crate::Result<i64> {
    range(n)
        .try_fold(1_i64, |acc, x| acc.checked_mul(x))
        .ok_or(Error::Overflow {
            operation: "product",
            n,
        })
}

/// Les folds par leur nom, pour la ligne de commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fold {
    SumOfSquares,
    Product,
    SumOfOdds,
    AlternatingSum,
    AlternatingSum2,
}

impl Fold {
    pub const ALL: [Fold; 5] = [
        Fold::SumOfSquares,
        Fold::Product,
        Fold::SumOfOdds,
        Fold::AlternatingSum,
        Fold::AlternatingSum2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fold::SumOfSquares => "sum-of-squares",
            Fold::Product => "product",
            Fold::SumOfOdds => "sum-of-odds",
            Fold::AlternatingSum => "alternating-sum",
            Fold::AlternatingSum2 => "alternating-sum2",
        }
    }

    /// Applique le fold à [1, n].
    pub fn apply(self, n: u32) -> i64 {
        let value = match self {
            Fold::SumOfSquares => sum_of_squares(n),
            Fold::Product => product(n),
            Fold::SumOfOdds => sum_of_odds(n),
            Fold::AlternatingSum => alternating_sum(n),
            Fold::AlternatingSum2 => alternating_sum2(n),
        };
        debug!(fold = self.name(), n, value, "fold applied");
        value
    }

    /// Comme `apply`, mais avec détection du débordement là où il est possible.
    pub fn try_apply(self, n: u32) -> crate::Result<i64> {
        match self {
            Fold::SumOfSquares => checked_sum_of_squares(n),
            Fold::Product => checked_product(n),
            // Bornées par n(n+1)/2 ≤ ~9.2e18 pour tout n: u32
            _ => Ok(self.apply(n)),
        }
    }
}

impl fmt::Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fold {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Fold::ALL
            .into_iter()
            .find(|fold| fold.name() == wanted)
            .ok_or_else(|| Error::UnknownFold(s.to_string()))
    }
}
