// src/noyau/complexe.rs
//
// Paire complexe minimale (valeur immuable, sans identité).
// Pas d'erreur signalée : la division par un dénominateur de module nul
// rend la sentinelle (+inf, +inf), à tester par l'appelant.

use std::ops::{Add, Div, Mul};

use super::operations::rad_to_deg;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexValue {
    pub real: f64,
    pub imag: f64,
}

impl ComplexValue {
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Sentinelle rendue par une division par zéro.
    pub const INFINI: ComplexValue = ComplexValue::new(f64::INFINITY, f64::INFINITY);

    pub fn magnitude(self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Argument (atan2(imag, real)), en degrés si demandé.
    pub fn phase(self, degres: bool) -> f64 {
        let p = self.imag.atan2(self.real);
        if degres {
            rad_to_deg(p)
        } else {
            p
        }
    }

    pub fn is_infinite(self) -> bool {
        self.real.is_infinite() || self.imag.is_infinite()
    }
}

pub fn complex_add(a: ComplexValue, b: ComplexValue) -> ComplexValue {
    ComplexValue::new(a.real + b.real, a.imag + b.imag)
}

pub fn complex_multiply(a: ComplexValue, b: ComplexValue) -> ComplexValue {
    ComplexValue::new(
        a.real * b.real - a.imag * b.imag,
        a.real * b.imag + a.imag * b.real,
    )
}

pub fn complex_divide(a: ComplexValue, b: ComplexValue) -> ComplexValue {
    let denom = b.real * b.real + b.imag * b.imag;
    if denom == 0.0 {
        return ComplexValue::INFINI;
    }
    ComplexValue::new(
        (a.real * b.real + a.imag * b.imag) / denom,
        (a.imag * b.real - a.real * b.imag) / denom,
    )
}

pub fn complex_magnitude(z: ComplexValue) -> f64 {
    z.magnitude()
}

pub fn complex_phase(z: ComplexValue, degres: bool) -> f64 {
    z.phase(degres)
}

impl Add for ComplexValue {
    type Output = ComplexValue;
    fn add(self, rhs: Self) -> Self::Output {
        complex_add(self, rhs)
    }
}

impl Mul for ComplexValue {
    type Output = ComplexValue;
    fn mul(self, rhs: Self) -> Self::Output {
        complex_multiply(self, rhs)
    }
}

impl Div for ComplexValue {
    type Output = ComplexValue;
    fn div(self, rhs: Self) -> Self::Output {
        complex_divide(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_et_produit() {
        let a = ComplexValue::new(1.0, 2.0);
        let b = ComplexValue::new(3.0, -1.0);
        assert_eq!(a + b, ComplexValue::new(4.0, 1.0));
        // (1+2i)(3-i) = 3 - i + 6i - 2i² = 5 + 5i
        assert_eq!(a * b, ComplexValue::new(5.0, 5.0));
    }

    #[test]
    fn division() {
        let a = ComplexValue::new(5.0, 5.0);
        let b = ComplexValue::new(3.0, -1.0);
        assert_eq!(a / b, ComplexValue::new(1.0, 2.0));
    }

    #[test]
    fn division_par_zero_sentinelle() {
        let q = complex_divide(ComplexValue::new(1.0, 1.0), ComplexValue::default());
        assert!(q.is_infinite());
        assert_eq!(q.real, f64::INFINITY);
        assert_eq!(q.imag, f64::INFINITY);
    }

    #[test]
    fn module_et_phase() {
        let z = ComplexValue::new(3.0, 4.0);
        assert_eq!(complex_magnitude(z), 5.0);
        let p = complex_phase(ComplexValue::new(0.0, 1.0), true);
        assert!((p - 90.0).abs() < 1e-12);
        let p = complex_phase(ComplexValue::new(-1.0, 0.0), false);
        assert!((p - std::f64::consts::PI).abs() < 1e-12);
    }
}
