//! Noyau d'évaluation scientifique
//!
//! Organisation interne (feuilles d'abord) :
//! - erreurs.rs    : ErrorKind / ParseErrorKind / ParseError (messages fixes)
//! - operations.rs : bibliothèque d'opérations vérifiées (NumericResult)
//! - complexe.rs   : paire complexe minimale
//! - constantes.rs : π, e, φ, √2, ln2, ln10
//! - jetons.rs     : tokenisation à la demande
//! - fonctions.rs  : table nom -> arité + appel
//! - etat.rs       : état de session (mémoire, mode d'angle, dernier résultat)
//! - eval.rs       : descente récursive + evaluate()
//! - format.rs     : affichage hôte ("ERROR: ...", scientifique, entier)

pub mod complexe;
pub mod constantes;
pub mod erreurs;
pub mod etat;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod operations;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use complexe::ComplexValue;
pub use erreurs::{ErrorKind, ParseError, ParseErrorKind};
pub use etat::CalculatorState;
pub use eval::{evaluate, ParseOutcome};
pub use format::{format_issue, format_resultat};
pub use operations::NumericResult;
