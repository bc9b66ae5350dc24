//! src/app/etat.rs
//!
//! État UI : entrée, affichage, erreur, plus la session du noyau.
//!
//! Contrats :
//! - Une seule `CalculatorState` par fenêtre, possédée ici.
//! - Les touches mémoire agissent sur le dernier résultat.
//! - Une erreur garde l’affichage précédent (on ne "vide" pas l’écran sur une faute).

use calculatrice_sci::noyau::etat::CalculatorState;
use calculatrice_sci::{evaluate, format_issue, format_resultat};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String, // dernier résultat formaté
    pub erreur: String,    // "ERROR: ..." si l’évaluation échoue
    pub jetons: String,    // découpage de la dernière expression

    // --- noyau ---
    pub session: CalculatorState,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: "0".to_string(),
            erreur: String::new(),
            jetons: String::new(),
            session: CalculatorState::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale (entrée + affichage + session).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.jetons.clear();
        self.session.reset();
        self.affichage = "0".to_string();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// "=" : évalue l’entrée dans la session.
    pub fn evaluer_entree(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            return;
        }

        self.jetons = calculatrice_sci::noyau::jetons::format_jetons(&s);
        let issue = evaluate(&s, &mut self.session);
        let texte = format_issue(&issue, self.session.precision);
        match issue {
            Ok(_) => {
                self.erreur.clear();
                self.affichage = texte;
            }
            Err(_) => self.set_erreur(texte),
        }
        self.focus_entree = true;
    }

    /* ------------------------ Mémoire (sur le dernier résultat) ------------------------ */

    pub fn memoire_store(&mut self) {
        let v = self.session.last_result;
        self.session.memory_store(v);
    }

    pub fn memoire_add(&mut self) {
        let v = self.session.last_result;
        self.session.memory_add(v);
    }

    pub fn memoire_subtract(&mut self) {
        let v = self.session.last_result;
        self.session.memory_subtract(v);
    }

    /// MR : insère "m" dans l’entrée (la valeur est lue à l’évaluation).
    pub fn memoire_recall(&mut self) {
        self.entree.push_str("m");
        self.affichage = format_resultat(self.session.memory_recall(), self.session.precision);
        self.focus_entree = true;
    }

    pub fn memoire_clear(&mut self) {
        self.session.memory_clear();
    }

    /* ------------------------ Paramètres ------------------------ */

    pub fn basculer_angle(&mut self) {
        self.session.angle_in_degrees = !self.session.angle_in_degrees;
        self.focus_entree = true;
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.session.set_precision(precision);
        self.focus_entree = true;
    }

    /// Libellé du mode d’angle courant.
    pub fn mode_angle(&self) -> &'static str {
        if self.session.angle_in_degrees {
            "DEG"
        } else {
            "RAD"
        }
    }
}
