// src/noyau/jetons.rs
//
// Tokenisation à la demande : le lecteur produit UN jeton à la fois et
// avance son curseur ; aucun tableau de jetons n'est construit pendant
// l'évaluation.
//
// Règles :
// - chiffre ou '.'             => nombre (un seul point, exposant e/E optionnel)
// - lettre, '_' ou '√'         => identifiant (normalisé en minuscules) ;
//                                 fonction / constante / variable décidé plus tard
// - + - * / ^ % ( ) ,          => opérateurs / parenthèses / virgule
// - autre caractère            => Inconnu(c) (l'évaluateur en fait InvalidCharacter)
// - fin de texte               => Fin, puis Fin à nouveau (idempotent)

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonction, constante ou variable : le classement se fait à l'évaluation.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % (modulo)

    LPar,
    RPar,
    Comma,

    Fin,
    Inconnu(char),
}

/// Jeton + position (index d'octet) de son premier caractère.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub position: usize,
}

/// Curseur sur le texte source.
#[derive(Clone, Debug)]
pub struct Lecteur<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Lecteur<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn longueur(&self) -> usize {
        self.source.len()
    }

    fn courant(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn saute_espaces(&mut self) {
        while let Some(c) = self.courant() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// Produit le jeton suivant et avance le curseur.
    pub fn suivant(&mut self) -> Jeton {
        self.saute_espaces();

        let debut = self.position;
        let c = match self.courant() {
            Some(c) => c,
            None => {
                return Jeton {
                    tok: Tok::Fin,
                    position: self.longueur(),
                }
            }
        };

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '%' => Some(Tok::Percent),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Comma),
            _ => None,
        };
        if let Some(tok) = simple {
            self.position += 1;
            return Jeton {
                tok,
                position: debut,
            };
        }

        let tok = if c.is_ascii_digit() || c == '.' {
            self.lire_nombre()
        } else if c.is_alphabetic() || c == '_' || c == '√' {
            self.lire_ident()
        } else {
            self.position += c.len_utf8();
            Tok::Inconnu(c)
        };

        Jeton {
            tok,
            position: debut,
        }
    }

    /// Littéral flottant : chiffres [. chiffres] [e|E [+|-] chiffres]
    fn lire_nombre(&mut self) -> Tok {
        let octets = self.source.as_bytes();
        let debut = self.position;
        let mut i = debut;

        let saute_chiffres = |mut i: usize| {
            while i < octets.len() && octets[i].is_ascii_digit() {
                i += 1;
            }
            i
        };

        i = saute_chiffres(i);
        let mut nb_chiffres = i - debut;

        if i < octets.len() && octets[i] == b'.' {
            let apres_point = i + 1;
            i = saute_chiffres(apres_point);
            nb_chiffres += i - apres_point;
        }

        if nb_chiffres == 0 {
            // '.' isolé
            self.position = debut + 1;
            return Tok::Inconnu('.');
        }

        // Exposant seulement s'il est suivi d'au moins un chiffre ;
        // sinon le 'e' reste pour le jeton suivant.
        if i < octets.len() && (octets[i] == b'e' || octets[i] == b'E') {
            let mut j = i + 1;
            if j < octets.len() && (octets[j] == b'+' || octets[j] == b'-') {
                j += 1;
            }
            if j < octets.len() && octets[j].is_ascii_digit() {
                i = saute_chiffres(j);
            }
        }

        self.position = i;
        match self.source[debut..i].parse::<f64>() {
            Ok(v) => Tok::Num(v),
            Err(_) => Tok::Inconnu('.'),
        }
    }

    /// Identifiant : premier caractère déjà validé, puis [alnum _]*
    fn lire_ident(&mut self) -> Tok {
        let debut = self.position;
        let mut fin = debut;
        for (k, c) in self.source[debut..].char_indices() {
            let accepte = if k == 0 {
                true
            } else {
                c.is_alphanumeric() || c == '_'
            };
            if !accepte {
                break;
            }
            fin = debut + k + c.len_utf8();
        }
        self.position = fin;
        Tok::Ident(self.source[debut..fin].to_lowercase())
    }
}

/// Format utilitaire (affichage "démarche") : jetons d'une expression en texte.
pub fn format_jetons(source: &str) -> String {
    let mut lecteur = Lecteur::new(source);
    let mut out = Vec::new();

    loop {
        let j = lecteur.suivant();
        let s = match &j.tok {
            Tok::Fin => break,
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(nom) => nom.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),

            Tok::Inconnu(c) => format!("?{c}"),
        };
        out.push(s);
    }
    out.join(" ")
}
