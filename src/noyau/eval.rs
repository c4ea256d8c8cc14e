//! Noyau — évaluation (pipeline réel)
//!
//! validation -> postfix (shunting-yard) -> découpe -> pile d'opérandes -> format
//!
//! Chaque étape rend un `Result` typé ; seul `evaluate` rabat l'erreur sur la
//! sentinelle publique. Aucun état partagé entre deux appels.

use tracing::debug;

use super::erreur::{ErreurCalcul, SENTINELLE_ERREUR};
use super::format::format_resultat;
use super::jetons::normalize;
use super::pile::eval_postfix;
use super::rpn::to_postfix;
use super::validation::valider;

/// Démarche d'un calcul réussi (panneau d'explication côté UI).
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub normalisee: String,
    pub postfix: String,
    pub valeur: f64,
    pub resultat: String,
}

/// Pipeline complet avec les formes intermédiaires.
pub fn evaluate_detaille(expression: &str) -> Result<Calcul, ErreurCalcul> {
    // 1) Pré-contrôle syntaxique
    valider(expression)?;

    // 2) Postfix (structure / parenthèses)
    let postfix = to_postfix(expression)?;

    // 3) Découpe sur les espaces, fragments vides ignorés
    let jetons: Vec<&str> = postfix.split_whitespace().collect();

    // 4) Pile d'opérandes
    let valeur: f64 = eval_postfix(&jetons)?;
    if !valeur.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini(valeur));
    }

    Ok(Calcul {
        normalisee: normalize(expression),
        postfix,
        valeur,
        resultat: format_resultat(valeur),
    })
}

/// API publique : renvoie toujours une chaîne (résultat ou sentinelle), jamais de panique.
pub fn evaluate(expression: &str) -> String {
    match evaluate_detaille(expression) {
        Ok(calcul) => {
            debug!(expression, postfix = %calcul.postfix, resultat = %calcul.resultat, "évalué");
            calcul.resultat
        }
        Err(e) => {
            debug!(expression, erreur = %e, "refusé");
            SENTINELLE_ERREUR.to_string()
        }
    }
}
