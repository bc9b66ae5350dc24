// src/noyau/constantes.rs
//
// Constantes nommées reconnues par l'évaluateur.
// Les noms arrivent déjà normalisés en minuscules (voir jetons.rs).

use num_traits::FloatConst;

/// Nombre d'or.
pub const PHI: f64 = 1.618_033_988_749_894_8;

/// Valeur d'une constante nommée, `None` si le nom n'en est pas une.
pub fn valeur_constante(nom: &str) -> Option<f64> {
    let v = match nom {
        "pi" | "π" => f64::PI(),
        "e" => f64::E(),
        "phi" | "φ" => PHI,
        "sqrt2" | "√2" => f64::SQRT_2(),
        "ln2" => f64::LN_2(),
        "ln10" => f64::LN_10(),
        _ => return None,
    };
    Some(v)
}

pub fn est_constante(nom: &str) -> bool {
    valeur_constante(nom).is_some()
}
