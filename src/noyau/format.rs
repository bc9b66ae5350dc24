// src/noyau/format.rs
//
// Affichage d'un résultat pour l'hôte :
// - entier exact (|v| < 1e15)               => "42"
// - |v| >= 1e10 ou 0 < |v| < 1e-4           => scientifique "1.2340000000e-05"
// - sinon                                   => `precision` chiffres significatifs,
//                                              zéros finaux retirés
// - erreur                                  => "ERROR: <message>"

use super::erreurs::ParseError;
use super::eval::ParseOutcome;

const ENTIER_AFFICHABLE_MAX: f64 = 1e15;
const SCIENTIFIQUE_GRAND: f64 = 1e10;
const SCIENTIFIQUE_PETIT: f64 = 1e-4;

pub fn format_resultat(v: f64, precision: usize) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if v == v.trunc() && a < ENTIER_AFFICHABLE_MAX {
        return format!("{v:.0}");
    }

    if a >= SCIENTIFIQUE_GRAND || a < SCIENTIFIQUE_PETIT {
        return format_scientifique(v, precision);
    }

    format_significatif(v, precision)
}

/// Mantisse à `precision` décimales, exposant signé sur au moins 2 chiffres.
fn format_scientifique(v: f64, precision: usize) -> String {
    let brut = format!("{v:.precision$e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) => {
            let n: i32 = exposant.parse().unwrap_or(0);
            let signe = if n < 0 { '-' } else { '+' };
            format!("{mantisse}e{signe}{:02}", n.abs())
        }
        None => brut,
    }
}

fn format_significatif(v: f64, precision: usize) -> String {
    let ordre = v.abs().log10().floor() as i32;
    let decimales = (precision as i32 - 1 - ordre).max(0) as usize;
    let mut s = format!("{v:.decimales$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

pub fn format_erreur(e: &ParseError) -> String {
    format!("ERROR: {}", e.message)
}

/// Texte final d'une évaluation, tel que l'hôte l'affiche.
pub fn format_issue(issue: &ParseOutcome, precision: usize) -> String {
    match issue {
        Ok(v) => format_resultat(*v, precision),
        Err(e) => format_erreur(e),
    }
}
