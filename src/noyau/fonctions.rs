// src/noyau/fonctions.rs
//
// Table des fonctions appelables depuis une expression :
// nom -> (arité, appel dans la bibliothèque d'opérations).
//
// Le mode d'angle est transmis explicitement aux fonctions qui en ont besoin
// (trig, trig inverse, phase) ; la bibliothèque ne lit jamais l'état.

use super::complexe::ComplexValue;
use super::erreurs::ErrorKind;
use super::operations::{self as ops, vers_entier, NumericResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    // arithmétique
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Mod,
    // racines
    Sqrt,
    Cbrt,
    NthRoot,
    // trig
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Asin,
    Acos,
    Atan,
    Atan2,
    // hyperboliques
    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
    // logarithmes / exponentielles
    Ln,
    Log,
    Log10,
    Log2,
    LogBase,
    Exp,
    Exp10,
    Exp2,
    // spéciales
    Factorial,
    Gamma,
    Abs,
    Floor,
    Ceil,
    Round,
    // combinatoire / entiers
    Permutation,
    Combination,
    Gcd,
    Lcm,
    // complexes (re, im)
    Magnitude,
    Phase,
}

impl Fonction {
    /// Identificateurs reconnus comme fonctions (déjà en minuscules).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        use Fonction::*;

        let f = match nom {
            "add" => Add,
            "sub" | "subtract" => Subtract,
            "mul" | "multiply" => Multiply,
            "div" | "divide" => Divide,
            "pow" | "power" => Power,
            "mod" => Mod,

            "sqrt" | "√" => Sqrt,
            "cbrt" => Cbrt,
            "root" | "nthroot" => NthRoot,

            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "sec" => Sec,
            "csc" => Csc,
            "cot" => Cot,
            "asin" => Asin,
            "acos" => Acos,
            "atan" => Atan,
            "atan2" => Atan2,

            "sinh" => Sinh,
            "cosh" => Cosh,
            "tanh" => Tanh,
            "sech" => Sech,
            "csch" => Csch,
            "coth" => Coth,

            "ln" => Ln,
            "log" => Log,
            "log10" => Log10,
            "log2" => Log2,
            "logb" => LogBase,
            "exp" => Exp,
            "exp10" => Exp10,
            "exp2" => Exp2,

            "fact" | "factorial" => Factorial,
            "gamma" => Gamma,
            "abs" => Abs,
            "floor" => Floor,
            "ceil" => Ceil,
            "round" => Round,

            "perm" | "npr" => Permutation,
            "comb" | "ncr" => Combination,
            "gcd" => Gcd,
            "lcm" => Lcm,

            "magnitude" | "cabs" => Magnitude,
            "phase" | "arg" => Phase,

            _ => return None,
        };
        Some(f)
    }

    /// Nombre d'arguments accepté : (minimum, maximum).
    pub fn arite(self) -> (usize, usize) {
        use Fonction::*;

        match self {
            Add | Subtract | Multiply | Divide | Power | Mod | NthRoot | Atan2 | LogBase
            | Permutation | Combination | Gcd | Lcm | Magnitude | Phase => (2, 2),
            Log => (1, 2),
            _ => (1, 1),
        }
    }

    /// Appelle l'opération. L'arité a déjà été vérifiée par l'évaluateur ;
    /// un nombre d'arguments inattendu rend InvalidInput (jamais de panique).
    pub fn appliquer(self, args: &[f64], degres: bool) -> NumericResult {
        use Fonction::*;

        match (self, args) {
            (Add, &[a, b]) => ops::add(a, b),
            (Subtract, &[a, b]) => ops::subtract(a, b),
            (Multiply, &[a, b]) => ops::multiply(a, b),
            (Divide, &[a, b]) => ops::divide(a, b),
            (Power, &[a, b]) => ops::power(a, b),
            (Mod, &[a, b]) => ops::modulo(a, b),

            (Sqrt, &[x]) => ops::sqrt(x),
            (Cbrt, &[x]) => ops::cbrt(x),
            (NthRoot, &[x, n]) => ops::nth_root(x, vers_entier(n)?),

            (Sin, &[x]) => ops::sin(x, degres),
            (Cos, &[x]) => ops::cos(x, degres),
            (Tan, &[x]) => ops::tan(x, degres),
            (Sec, &[x]) => ops::sec(x, degres),
            (Csc, &[x]) => ops::csc(x, degres),
            (Cot, &[x]) => ops::cot(x, degres),
            (Asin, &[x]) => ops::asin(x, degres),
            (Acos, &[x]) => ops::acos(x, degres),
            (Atan, &[x]) => ops::atan(x, degres),
            (Atan2, &[y, x]) => ops::atan2(y, x, degres),

            (Sinh, &[x]) => ops::sinh(x),
            (Cosh, &[x]) => ops::cosh(x),
            (Tanh, &[x]) => ops::tanh(x),
            (Sech, &[x]) => ops::sech(x),
            (Csch, &[x]) => ops::csch(x),
            (Coth, &[x]) => ops::coth(x),

            (Ln, &[x]) => ops::ln(x),
            (Log, &[x]) => ops::log10(x),
            (Log, &[x, base]) | (LogBase, &[x, base]) => ops::log_base(x, base),
            (Log10, &[x]) => ops::log10(x),
            (Log2, &[x]) => ops::log2(x),
            (Exp, &[x]) => ops::exp(x),
            (Exp10, &[x]) => ops::exp10(x),
            (Exp2, &[x]) => ops::exp2(x),

            (Factorial, &[n]) => ops::factorial(vers_entier(n)?),
            (Gamma, &[x]) => ops::gamma(x),
            (Abs, &[x]) => ops::abs(x),
            (Floor, &[x]) => ops::floor(x),
            (Ceil, &[x]) => ops::ceil(x),
            (Round, &[x]) => ops::round(x),

            (Permutation, &[n, r]) => ops::permutation(vers_entier(n)?, vers_entier(r)?),
            (Combination, &[n, r]) => ops::combination(vers_entier(n)?, vers_entier(r)?),
            (Gcd, &[a, b]) => ops::gcd(vers_entier(a)?, vers_entier(b)?),
            (Lcm, &[a, b]) => ops::lcm(vers_entier(a)?, vers_entier(b)?),

            (Magnitude, &[re, im]) => Ok(ComplexValue::new(re, im).magnitude()),
            (Phase, &[re, im]) => Ok(ComplexValue::new(re, im).phase(degres)),

            _ => Err(ErrorKind::InvalidInput),
        }
    }
}

pub fn est_fonction(nom: &str) -> bool {
    Fonction::depuis_nom(nom).is_some()
}
