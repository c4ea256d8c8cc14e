//! Calculatrice RPN : noyau d'évaluation d'expressions infix + état d'affichage.
//!
//! L'UI (boutons, rendu) reste dehors : elle pousse des caractères dans
//! `app::EtatCalculatrice` et relit deux chaînes (expression, résultat).

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, SENTINELLE_ERREUR};
