// src/noyau/format.rs

use std::fmt::Display;

use num_traits::Float;

/// Forme canonique d'un résultat fini :
/// - écriture la plus courte qui relit la même valeur (14, 0.5, 0.30000000000000004)
/// - pas de ".0" pour les entiers
/// - -0 s'affiche 0
pub fn format_resultat<F: Float + Display>(v: F) -> String {
    if v.is_zero() {
        return "0".to_string();
    }
    format!("{v}")
}
