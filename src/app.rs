// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + terminal.rs)
// - Ré-exporter EtatCalculatrice (pour main.rs: use calculatrice_rpn::app::EtatCalculatrice;)

pub mod etat;
pub mod terminal;

// Ré-export pratique
pub use etat::{Bouton, EtatCalculatrice, BOUTONS};
