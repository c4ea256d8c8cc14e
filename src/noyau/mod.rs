//! Noyau de calcul (sans état)
//!
//! Organisation interne :
//! - jetons.rs     : normalisation (espaces) + découpe en jetons
//! - operateur.rs  : alphabet + précédence + application binaire
//! - validation.rs : pré-contrôle syntaxique (motifs)
//! - rpn.rs        : shunting-yard (infix -> postfix)
//! - pile.rs       : évaluation postfix (pile d'opérandes)
//! - format.rs     : forme canonique du résultat
//! - erreur.rs     : erreurs typées + sentinelle publique
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod pile;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ErreurCalcul, SENTINELLE_ERREUR};
pub use eval::{evaluate, evaluate_detaille, Calcul};
pub use pile::eval_postfix;
pub use rpn::to_postfix;
pub use validation::is_valid;
