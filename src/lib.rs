//! Calculatrice scientifique: noyau d'évaluation.
//!
//! ```
//! use calculatrice_sci::{evaluate, format_issue, CalculatorState};
//!
//! let mut etat = CalculatorState::new(); // degrés par défaut
//! let issue = evaluate("2 * sin(30) + 2 ^ 3 ^ 2", &mut etat);
//! assert_eq!(format_issue(&issue, etat.precision), "513");
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, format_issue, format_resultat, CalculatorState, ComplexValue, ErrorKind,
    NumericResult, ParseError, ParseErrorKind, ParseOutcome,
};
