// src/noyau/operations.rs
//
// Bibliothèque d'opérations numériques vérifiées.
//
// Contrat uniforme : chaque opération rend un `NumericResult`
// (= Result<f64, ErrorKind>). Aucune lecture d'état global : le mode d'angle
// arrive en paramètre explicite (`degres`).
//
// Politique d'erreurs :
// - Overflow       : tout résultat non fini (inf / NaN)
// - DivisionByZero : diviseur nul, ou fonction réciproque dont la base est
//                    nulle à TOLERANCE près
// - DomainError    : entrée hors du domaine mathématique
// - InvalidInput   : argument non entier pour une opération entière

use std::f64::consts::{FRAC_PI_2, PI};

use num_traits::ToPrimitive;

use super::erreurs::ErrorKind;

/// Résultat d'une opération de la bibliothèque.
pub type NumericResult = Result<f64, ErrorKind>;

/// Seuil absolu sous lequel sin/cos/tan/sinh sont considérés nuls.
pub const TOLERANCE: f64 = 1e-15;

/// Au-delà, 171! dépasse la plage d'un f64.
pub const FACTORIELLE_MAX: i64 = 170;

/// Plus grand entier représentable exactement en f64 (2^53).
const ENTIER_EXACT_MAX: f64 = 9_007_199_254_740_992.0;

/// Lanczos (g = 7, 9 coefficients).
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/* ------------------------ Utilitaires ------------------------ */

/// Overflow si la valeur n'est pas finie.
fn fini(v: f64) -> NumericResult {
    if is_finite(v) {
        Ok(v)
    } else {
        Err(ErrorKind::Overflow)
    }
}

pub fn is_finite(x: f64) -> bool {
    x.is_finite()
}

pub fn is_integer(x: f64) -> bool {
    x == x.floor()
}

pub fn deg_to_rad(degres: f64) -> f64 {
    degres * PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

fn en_radians(x: f64, degres: bool) -> f64 {
    if degres {
        deg_to_rad(x)
    } else {
        x
    }
}

fn depuis_radians(x: f64, degres: bool) -> f64 {
    if degres {
        rad_to_deg(x)
    } else {
        x
    }
}

/// Conversion SAFE d'un argument flottant vers un entier (opérations
/// combinatoires / arithmétique entière).
pub fn vers_entier(x: f64) -> Result<i64, ErrorKind> {
    if !x.is_finite() || x.fract() != 0.0 {
        return Err(ErrorKind::InvalidInput);
    }
    if x.abs() > ENTIER_EXACT_MAX {
        return Err(ErrorKind::Overflow);
    }
    x.to_i64().ok_or(ErrorKind::Overflow)
}

/* ------------------------ Arithmétique ------------------------ */

pub fn add(a: f64, b: f64) -> NumericResult {
    fini(a + b)
}

pub fn subtract(a: f64, b: f64) -> NumericResult {
    fini(a - b)
}

pub fn multiply(a: f64, b: f64) -> NumericResult {
    fini(a * b)
}

pub fn divide(a: f64, b: f64) -> NumericResult {
    if b == 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(a / b)
}

/// Reste flottant (signe du dividende, comme fmod).
pub fn modulo(a: f64, b: f64) -> NumericResult {
    if b == 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(a % b)
}

pub fn power(base: f64, exposant: f64) -> NumericResult {
    if base == 0.0 && exposant < 0.0 {
        return Err(ErrorKind::DivisionByZero);
    }
    if base < 0.0 && !is_integer(exposant) {
        return Err(ErrorKind::DomainError);
    }
    fini(base.powf(exposant))
}

/* ------------------------ Racines ------------------------ */

pub fn sqrt(x: f64) -> NumericResult {
    if x < 0.0 {
        return Err(ErrorKind::DomainError);
    }
    fini(x.sqrt())
}

pub fn cbrt(x: f64) -> NumericResult {
    fini(x.cbrt())
}

/// Racine n-ième réelle. Indice impair + x négatif : racine négative.
pub fn nth_root(x: f64, n: i64) -> NumericResult {
    if n == 0 {
        return Err(ErrorKind::DivisionByZero);
    }
    if n % 2 == 0 && x < 0.0 {
        return Err(ErrorKind::DomainError);
    }
    if x < 0.0 {
        return fini(-(-x).powf(1.0 / n as f64));
    }
    fini(x.powf(1.0 / n as f64))
}

/* ------------------------ Trigonométrie ------------------------ */

pub fn sin(x: f64, degres: bool) -> NumericResult {
    fini(en_radians(x, degres).sin())
}

pub fn cos(x: f64, degres: bool) -> NumericResult {
    fini(en_radians(x, degres).cos())
}

/// Indéfinie aux multiples impairs de π/2 (après réduction modulo π).
pub fn tan(x: f64, degres: bool) -> NumericResult {
    let r = en_radians(x, degres);
    let n = r % PI;
    if (n - FRAC_PI_2).abs() < TOLERANCE || (n + FRAC_PI_2).abs() < TOLERANCE {
        return Err(ErrorKind::DomainError);
    }
    fini(r.tan())
}

pub fn sec(x: f64, degres: bool) -> NumericResult {
    let c = cos(x, degres)?;
    if c.abs() < TOLERANCE {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(1.0 / c)
}

pub fn csc(x: f64, degres: bool) -> NumericResult {
    let s = sin(x, degres)?;
    if s.abs() < TOLERANCE {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(1.0 / s)
}

/// Hérite du DomainError de `tan` aux multiples impairs de π/2.
pub fn cot(x: f64, degres: bool) -> NumericResult {
    let t = tan(x, degres)?;
    if t.abs() < TOLERANCE {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(1.0 / t)
}

pub fn asin(x: f64, degres: bool) -> NumericResult {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErrorKind::DomainError);
    }
    fini(depuis_radians(x.asin(), degres))
}

pub fn acos(x: f64, degres: bool) -> NumericResult {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErrorKind::DomainError);
    }
    fini(depuis_radians(x.acos(), degres))
}

pub fn atan(x: f64, degres: bool) -> NumericResult {
    fini(depuis_radians(x.atan(), degres))
}

pub fn atan2(y: f64, x: f64, degres: bool) -> NumericResult {
    fini(depuis_radians(y.atan2(x), degres))
}

/* ------------------------ Hyperboliques ------------------------ */

pub fn sinh(x: f64) -> NumericResult {
    fini(x.sinh())
}

pub fn cosh(x: f64) -> NumericResult {
    fini(x.cosh())
}

pub fn tanh(x: f64) -> NumericResult {
    fini(x.tanh())
}

pub fn sech(x: f64) -> NumericResult {
    fini(1.0 / x.cosh())
}

pub fn csch(x: f64) -> NumericResult {
    let s = x.sinh();
    if s.abs() < TOLERANCE {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(1.0 / s)
}

pub fn coth(x: f64) -> NumericResult {
    if x.sinh().abs() < TOLERANCE {
        return Err(ErrorKind::DivisionByZero);
    }
    fini(1.0 / x.tanh())
}

/* ------------------------ Logarithmes / exponentielles ------------------------ */

/// Logarithme naturel.
pub fn ln(x: f64) -> NumericResult {
    if x <= 0.0 {
        return Err(ErrorKind::DomainError);
    }
    fini(x.ln())
}

pub fn log10(x: f64) -> NumericResult {
    if x <= 0.0 {
        return Err(ErrorKind::DomainError);
    }
    fini(x.log10())
}

pub fn log2(x: f64) -> NumericResult {
    if x <= 0.0 {
        return Err(ErrorKind::DomainError);
    }
    fini(x.log2())
}

pub fn log_base(x: f64, base: f64) -> NumericResult {
    if x <= 0.0 || base <= 0.0 || base == 1.0 {
        return Err(ErrorKind::DomainError);
    }
    fini(x.ln() / base.ln())
}

pub fn exp(x: f64) -> NumericResult {
    fini(x.exp())
}

pub fn exp10(x: f64) -> NumericResult {
    fini(10f64.powf(x))
}

pub fn exp2(x: f64) -> NumericResult {
    fini(x.exp2())
}

/* ------------------------ Fonctions spéciales ------------------------ */

/// n! itératif (exact pour n <= 170).
pub fn factorial(n: i64) -> NumericResult {
    if n < 0 {
        return Err(ErrorKind::DomainError);
    }
    if n > FACTORIELLE_MAX {
        return Err(ErrorKind::Overflow);
    }
    let mut acc = 1.0;
    for i in 2..=n {
        acc *= i as f64;
    }
    Ok(acc)
}

/// Γ(x). Entiers 1..=171 : chemin exact par la factorielle.
pub fn gamma(x: f64) -> NumericResult {
    if x <= 0.0 && is_integer(x) {
        return Err(ErrorKind::DomainError);
    }
    if is_integer(x) && (1.0..=(FACTORIELLE_MAX + 1) as f64).contains(&x) {
        return factorial(x as i64 - 1);
    }
    fini(gamma_lanczos(x))
}

fn gamma_lanczos(x: f64) -> f64 {
    if x < 0.5 {
        // réflexion : Γ(x)Γ(1-x) = π / sin(πx)
        return PI / ((PI * x).sin() * gamma_lanczos(1.0 - x));
    }

    let z = x - 1.0;
    let mut somme = LANCZOS_COEFFS[0];
    for (i, c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        somme += c / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;

    // t^(z+1/2) coupé en deux moitiés : évite inf * 0 près de x = 171
    let moitie = t.powf((z + 0.5) / 2.0);
    (2.0 * PI).sqrt() * moitie * ((-t).exp() * moitie) * somme
}

pub fn abs(x: f64) -> NumericResult {
    Ok(x.abs())
}

pub fn floor(x: f64) -> NumericResult {
    Ok(x.floor())
}

pub fn ceil(x: f64) -> NumericResult {
    Ok(x.ceil())
}

/// Arrondi "demi loin de zéro".
pub fn round(x: f64) -> NumericResult {
    Ok(x.round())
}

/* ------------------------ Combinatoire ------------------------ */

/// nPr, débordement vérifié à chaque pas.
pub fn permutation(n: i64, r: i64) -> NumericResult {
    if n < 0 || r < 0 || r > n {
        return Err(ErrorKind::DomainError);
    }
    let mut acc = 1.0;
    for i in (n - r + 1..=n).rev() {
        acc *= i as f64;
        if !is_finite(acc) {
            return Err(ErrorKind::Overflow);
        }
    }
    Ok(acc)
}

/// nCr via C(n,r) = C(n,n-r) et accumulation acc * (n-i) / (i+1).
pub fn combination(n: i64, r: i64) -> NumericResult {
    if n < 0 || r < 0 || r > n {
        return Err(ErrorKind::DomainError);
    }
    let r = r.min(n - r);
    let mut acc = 1.0;
    for i in 0..r {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
        if !is_finite(acc) {
            return Err(ErrorKind::Overflow);
        }
    }
    Ok(acc)
}

/* ------------------------ Théorie des nombres ------------------------ */

fn pgcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub fn gcd(a: i64, b: i64) -> NumericResult {
    Ok(pgcd(a.unsigned_abs(), b.unsigned_abs()) as f64)
}

/// lcm(a, 0) = lcm(0, b) = 0 (pas une erreur).
pub fn lcm(a: i64, b: i64) -> NumericResult {
    if a == 0 || b == 0 {
        return Ok(0.0);
    }
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    let g = pgcd(a, b);
    fini((a / g) as f64 * b as f64)
}
