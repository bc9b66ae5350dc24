//! Tests scientifiques (campagne) : propriétés vérifiables du noyau.
//!
//! - propriétés quantifiées : proptest (entrées bornées, pas de grille brute)
//! - propriétés ponctuelles : précédence, arité, parenthèses, reset

use proptest::prelude::*;

use super::erreurs::{ErrorKind, ParseErrorKind};
use super::etat::CalculatorState;
use super::eval::evaluate;
use super::format::format_resultat;
use super::operations as ops;

fn eval_ok(expr: &str) -> f64 {
    let mut etat = CalculatorState::new();
    evaluate(expr, &mut etat).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_kind(expr: &str) -> ParseErrorKind {
    let mut etat = CalculatorState::new();
    match evaluate(expr, &mut etat) {
        Ok(v) => panic!("expr={expr:?} devait échouer, a rendu {v}"),
        Err(e) => e.kind,
    }
}

/* ------------------------ Division / racine ------------------------ */

proptest! {
    #[test]
    fn sci_division_par_zero_toujours_signalee(a in -1e300f64..1e300) {
        prop_assert_eq!(ops::divide(a, 0.0), Err(ErrorKind::DivisionByZero));
        prop_assert_eq!(ops::divide(a, -0.0), Err(ErrorKind::DivisionByZero));
    }

    #[test]
    fn sci_racine_negative_hors_domaine(x in -1e300f64..-1e-300) {
        prop_assert_eq!(ops::sqrt(x), Err(ErrorKind::DomainError));
    }

    #[test]
    fn sci_racine_positive_coherente(x in 0.0f64..1e300) {
        let r = ops::sqrt(x).unwrap();
        prop_assert!(r >= 0.0);
        prop_assert!((r * r - x).abs() <= 1e-12 * x.max(1e-300));
    }

    #[test]
    fn sci_combinaison_symetrique(n in 0i64..200, k in 0i64..200) {
        let r = k % (n + 1);
        let a = ops::combination(n, r);
        let b = ops::combination(n, n - r);
        match (a, b) {
            (Ok(x), Ok(y)) => prop_assert!((x - y).abs() <= 1e-9 * x.abs().max(1.0)),
            (x, y) => prop_assert_eq!(x, y),
        }
    }

    #[test]
    fn sci_factorielle_entiere(n in 0i64..=170) {
        let f = ops::factorial(n).unwrap();
        prop_assert!(f.is_finite());
        prop_assert_eq!(f, f.trunc());
    }

    #[test]
    fn sci_texte_egal_appel_direct(x in -720.0f64..720.0) {
        // round-trip : "sin(x)" en degrés == sin(x, degrés)
        let mut etat = CalculatorState::new();
        let texte = format!("sin({x})");
        let via_texte = evaluate(&texte, &mut etat).unwrap();
        prop_assert_eq!(via_texte, ops::sin(x, true).unwrap());

        let texte = format!("cos({x})");
        let via_texte = evaluate(&texte, &mut etat).unwrap();
        prop_assert_eq!(via_texte, ops::cos(x, true).unwrap());
    }

    #[test]
    fn sci_reset_idempotent(m in -1e6f64..1e6, deg in any::<bool>(), p in 0usize..40) {
        let mut etat = CalculatorState::new();
        etat.memory_store(m);
        etat.angle_in_degrees = deg;
        etat.set_precision(p);
        etat.set_last_expression("1+2");

        etat.reset();
        let une_fois = etat.clone();
        etat.reset();
        prop_assert_eq!(etat, une_fois);
    }
}

/* ------------------------ Factorielle : bornes ------------------------ */

#[test]
fn sci_factorielle_bornes() {
    assert_eq!(ops::factorial(171), Err(ErrorKind::Overflow));
    assert_eq!(ops::factorial(-1), Err(ErrorKind::DomainError));
    assert_eq!(ops::factorial(10), Ok(3_628_800.0));
}

/* ------------------------ Round-trip texte / appel ------------------------ */

#[test]
fn sci_round_trip_fonctions() {
    let mut etat = CalculatorState::new();
    let cas: [(&str, f64); 6] = [
        ("sin(30)", ops::sin(30.0, true).unwrap()),
        ("tan(45)", ops::tan(45.0, true).unwrap()),
        ("acos(0.5)", ops::acos(0.5, true).unwrap()),
        ("gamma(4.5)", ops::gamma(4.5).unwrap()),
        ("logb(81, 3)", ops::log_base(81.0, 3.0).unwrap()),
        ("perm(10, 3)", ops::permutation(10, 3).unwrap()),
    ];
    for (texte, attendu) in cas {
        assert_eq!(evaluate(texte, &mut etat), Ok(attendu), "texte={texte:?}");
    }
}

/* ------------------------ Grammaire ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("(2 + 3) * 4"), 20.0);
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval_ok("-2 ^ 2"), -4.0);
}

#[test]
fn sci_parentheses_desequilibrees() {
    let mut etat = CalculatorState::new();
    let e = evaluate("(2 + 3", &mut etat).unwrap_err();
    assert_eq!(e.kind, ParseErrorKind::MismatchedParentheses);
    assert_eq!(e.position, "(2 + 3".len());
}

#[test]
fn sci_arite() {
    assert_eq!(eval_kind("atan2(1)"), ParseErrorKind::TooFewArguments);
    assert_eq!(eval_kind("sqrt(1,2)"), ParseErrorKind::TooManyArguments);
}

/* ------------------------ Chaîne complète (texte -> affichage) ------------------------ */

#[test]
fn sci_affichage_bout_en_bout() {
    let mut etat = CalculatorState::new();
    let v = evaluate("1 / 3", &mut etat).unwrap();
    assert_eq!(format_resultat(v, etat.precision), "0.3333333333");

    let v = evaluate("factorial(20)", &mut etat).unwrap();
    assert_eq!(format_resultat(v, etat.precision), "2.4329020082e+18");

    let v = evaluate("2 ^ 10", &mut etat).unwrap();
    assert_eq!(format_resultat(v, etat.precision), "1024");
}
