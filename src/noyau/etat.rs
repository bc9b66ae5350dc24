//! src/noyau/etat.rs
//!
//! État de session de la calculatrice.
//!
//! Contrats :
//! - Construit explicitement (`new`), possédé par UN appelant, passé par
//!   référence à chaque évaluation (aucun singleton global).
//! - `reset` est la seule remise à zéro sans détruire l'objet ;
//!   la destruction est le `Drop` ordinaire.
//! - `last_expression` est tronquée, jamais débordée.

use log::debug;

/// Précision d'affichage par défaut (chiffres significatifs).
pub const PRECISION_DEFAUT: usize = 10;

/// Garde-fou : au-delà, un f64 n'a plus de chiffres significatifs fiables.
pub const PRECISION_MAX: usize = 15;

/// Longueur maximale (en caractères) conservée pour la dernière expression.
pub const LONGUEUR_MAX_EXPRESSION: usize = 511;

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub memory: f64,
    pub last_result: f64,
    pub angle_in_degrees: bool,
    pub precision: usize,
    last_expression: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            memory: 0.0,
            last_result: 0.0,
            angle_in_degrees: true,
            precision: PRECISION_DEFAUT,
            last_expression: String::new(),
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valeurs documentées : mémoire 0, dernier résultat 0, degrés,
    /// précision 10, expression vide.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("état remis à zéro");
    }

    pub fn last_expression(&self) -> &str {
        &self.last_expression
    }

    /// Mémorise le texte d'une expression (tronqué à LONGUEUR_MAX_EXPRESSION).
    pub fn set_last_expression(&mut self, texte: &str) {
        self.last_expression.clear();
        self.last_expression
            .extend(texte.chars().take(LONGUEUR_MAX_EXPRESSION));
    }

    /// Garde-fou : précision bornée à 1..=PRECISION_MAX.
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.clamp(1, PRECISION_MAX);
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memory_store(&mut self, valeur: f64) {
        self.memory = valeur;
        debug!("mémoire := {valeur}");
    }

    pub fn memory_add(&mut self, valeur: f64) {
        self.memory += valeur;
        debug!("mémoire += {valeur} -> {}", self.memory);
    }

    pub fn memory_subtract(&mut self, valeur: f64) {
        self.memory -= valeur;
        debug!("mémoire -= {valeur} -> {}", self.memory);
    }

    pub fn memory_recall(&self) -> f64 {
        self.memory
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        debug!("mémoire effacée");
    }
}

/* ------------------------ Variantes "état absent" ------------------------ */
//
// Pour un hôte qui n'a pas (encore) d'état : sans état, ce sont des no-ops
// et le rappel rend 0.

pub fn memory_store(etat: Option<&mut CalculatorState>, valeur: f64) {
    if let Some(e) = etat {
        e.memory_store(valeur);
    }
}

pub fn memory_add(etat: Option<&mut CalculatorState>, valeur: f64) {
    if let Some(e) = etat {
        e.memory_add(valeur);
    }
}

pub fn memory_subtract(etat: Option<&mut CalculatorState>, valeur: f64) {
    if let Some(e) = etat {
        e.memory_subtract(valeur);
    }
}

pub fn memory_recall(etat: Option<&CalculatorState>) -> f64 {
    etat.map_or(0.0, CalculatorState::memory_recall)
}

pub fn memory_clear(etat: Option<&mut CalculatorState>) {
    if let Some(e) = etat {
        e.memory_clear();
    }
}
