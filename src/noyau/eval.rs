//! Noyau: évaluation par descente récursive
//!
//! Grammaire (règle la plus haute d'abord) :
//!
//! ```text
//! expression := term (('+' | '-') term)*             gauche
//! term       := factor (('*' | '/' | '%') factor)*   gauche
//! factor     := primary ('^' factor)?                droite
//! primary    := NOMBRE | CONSTANTE | VARIABLE
//!             | ('-' | '+') factor
//!             | '(' expression ')'
//!             | FONCTION '(' expression (',' expression)* ')'
//! ```
//!
//! Le signe unaire porte sur un `factor` : `-2^2` vaut -4.
//!
//! Évaluation immédiate (pas d'AST) : chaque règle rend directement un f64
//! ou la PREMIÈRE erreur, remontée telle quelle jusqu'en haut.

use log::{debug, warn};

use super::constantes::valeur_constante;
use super::erreurs::{ErrorKind, ParseError, ParseErrorKind};
use super::etat::CalculatorState;
use super::fonctions::Fonction;
use super::jetons::{Jeton, Lecteur, Tok};
use super::operations::{self as ops, NumericResult};

/// Issue terminale d'une évaluation.
pub type ParseOutcome = Result<f64, ParseError>;

/// Garde-fou : profondeur d'imbrication maximale (parenthèses, signes, ^).
pub const PROFONDEUR_MAX: usize = 200;

/// Garde-fou : nombre maximal d'arguments d'un appel de fonction.
pub const ARGUMENTS_MAX: usize = 8;

/// API publique : évalue `texte` contre l'état de session.
///
/// - la dernière expression est toujours mémorisée (tronquée) ;
/// - en cas de succès seulement, le résultat devient `last_result` ;
/// - un échec ne touche ni la mémoire ni le mode d'angle.
pub fn evaluate(texte: &str, etat: &mut CalculatorState) -> ParseOutcome {
    etat.set_last_expression(texte);

    let issue = evaluer(texte, etat);
    match &issue {
        Ok(v) => {
            etat.last_result = *v;
            debug!("« {texte} » = {v}");
        }
        Err(e) => warn!("« {texte} » : {e}"),
    }
    issue
}

fn evaluer(texte: &str, etat: &CalculatorState) -> ParseOutcome {
    let mut ev = Evaluateur::new(texte, etat)?;
    let v = ev.expression()?;

    // Expression complète : il ne doit rester que Fin.
    match ev.courant.tok {
        Tok::Fin => Ok(v),
        Tok::RPar => Err(ev.erreur(ParseErrorKind::MismatchedParentheses)),
        _ => Err(ev.erreur(ParseErrorKind::InvalidSyntax)),
    }
}

/// Contexte d'une évaluation : curseur + jeton courant + état emprunté.
struct Evaluateur<'a> {
    lecteur: Lecteur<'a>,
    etat: &'a CalculatorState,
    courant: Jeton,
    profondeur: usize,
}

impl<'a> Evaluateur<'a> {
    fn new(texte: &'a str, etat: &'a CalculatorState) -> Result<Self, ParseError> {
        let mut lecteur = Lecteur::new(texte);
        let courant = lecteur.suivant();
        let ev = Self {
            lecteur,
            etat,
            courant,
            profondeur: 0,
        };
        ev.verifie_caractere()?;
        Ok(ev)
    }

    fn avancer(&mut self) -> Result<(), ParseError> {
        self.courant = self.lecteur.suivant();
        self.verifie_caractere()
    }

    fn verifie_caractere(&self) -> Result<(), ParseError> {
        if let Tok::Inconnu(_) = self.courant.tok {
            return Err(self.erreur(ParseErrorKind::InvalidCharacter));
        }
        Ok(())
    }

    fn erreur(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.courant.position)
    }

    /// Remonte une erreur arithmétique sans perdre sa classe.
    fn verifie(r: NumericResult, position: usize) -> Result<f64, ParseError> {
        r.map_err(|kind| ParseError::new(kind.into(), position))
    }

    /* ------------------------ Règles ------------------------ */

    fn expression(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.term()?;
        loop {
            let pos = self.courant.position;
            let op: fn(f64, f64) -> NumericResult = match self.courant.tok {
                Tok::Plus => ops::add,
                Tok::Minus => ops::subtract,
                _ => return Ok(acc),
            };
            self.avancer()?;
            let droite = self.term()?;
            acc = Self::verifie(op(acc, droite), pos)?;
        }
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.factor()?;
        loop {
            let pos = self.courant.position;
            let op: fn(f64, f64) -> NumericResult = match self.courant.tok {
                Tok::Star => ops::multiply,
                Tok::Slash => ops::divide,
                Tok::Percent => ops::modulo,
                _ => return Ok(acc),
            };
            self.avancer()?;
            let droite = self.factor()?;
            acc = Self::verifie(op(acc, droite), pos)?;
        }
    }

    /// Toute récursion passe par ici : c'est le seul point de comptage.
    fn factor(&mut self) -> Result<f64, ParseError> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(self.erreur(ParseErrorKind::InvalidSyntax));
        }
        self.profondeur += 1;
        let r = self.factor_interne();
        self.profondeur -= 1;
        r
    }

    fn factor_interne(&mut self) -> Result<f64, ParseError> {
        let base = self.primary()?;
        if self.courant.tok != Tok::Caret {
            return Ok(base);
        }
        let pos = self.courant.position;
        self.avancer()?;
        let exposant = self.factor()?;
        Self::verifie(ops::power(base, exposant), pos)
    }

    fn primary(&mut self) -> Result<f64, ParseError> {
        let pos = self.courant.position;

        match &self.courant.tok {
            Tok::Num(v) => {
                let v = *v;
                self.avancer()?;
                // littéral hors plage (ex: 1e999)
                Self::verifie(
                    if v.is_finite() {
                        Ok(v)
                    } else {
                        Err(ErrorKind::Overflow)
                    },
                    pos,
                )
            }

            Tok::Minus => {
                self.avancer()?;
                Ok(-self.factor()?)
            }
            Tok::Plus => {
                self.avancer()?;
                self.factor()
            }

            Tok::LPar => {
                self.avancer()?;
                let v = self.expression()?;
                self.attendre_rpar()?;
                Ok(v)
            }

            Tok::Ident(nom) => {
                let nom = nom.clone();
                self.avancer()?;
                self.identifiant(&nom, pos)
            }

            _ => Err(self.erreur(ParseErrorKind::InvalidSyntax)),
        }
    }

    fn attendre_rpar(&mut self) -> Result<(), ParseError> {
        if self.courant.tok != Tok::RPar {
            return Err(self.erreur(ParseErrorKind::MismatchedParentheses));
        }
        self.avancer()
    }

    /// Identifiant déjà consommé : appel de fonction si '(' suit,
    /// sinon constante, sinon variable.
    fn identifiant(&mut self, nom: &str, pos: usize) -> Result<f64, ParseError> {
        if self.courant.tok == Tok::LPar {
            let f = Fonction::depuis_nom(nom)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFunction, pos))?;
            return self.appel(f, pos);
        }

        if let Some(v) = valeur_constante(nom) {
            return Ok(v);
        }

        match nom {
            "m" | "mem" => Ok(self.etat.memory),
            "ans" => Ok(self.etat.last_result),
            _ => Err(ParseError::new(ParseErrorKind::InvalidSyntax, pos)),
        }
    }

    /// Arguments évalués de gauche à droite, puis arité, puis appel.
    fn appel(&mut self, f: Fonction, pos: usize) -> Result<f64, ParseError> {
        self.avancer()?; // '('

        let mut args: Vec<f64> = Vec::with_capacity(ARGUMENTS_MAX);
        if self.courant.tok != Tok::RPar {
            loop {
                if args.len() == ARGUMENTS_MAX {
                    return Err(self.erreur(ParseErrorKind::TooManyArguments));
                }
                args.push(self.expression()?);
                if self.courant.tok != Tok::Comma {
                    break;
                }
                self.avancer()?;
            }
        }
        self.attendre_rpar()?;

        let (min, max) = f.arite();
        if args.len() < min {
            return Err(ParseError::new(ParseErrorKind::TooFewArguments, pos));
        }
        if args.len() > max {
            return Err(ParseError::new(ParseErrorKind::TooManyArguments, pos));
        }

        Self::verifie(f.appliquer(&args, self.etat.angle_in_degrees), pos)
    }
}
