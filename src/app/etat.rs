//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir les deux chaînes affichées (expression, résultat) et
//! appliquer les commandes discrètes venues des boutons.
//!
//! Contrats :
//! - Aucune logique de calcul ici : "=" délègue à `noyau::evaluate`.
//! - Le noyau ne garde rien entre deux appels ; tout l'état vit ici.

use tracing::trace;

use crate::noyau::evaluate;

/// Pavé de la calculatrice, dans l'ordre d'affichage (4 colonnes).
pub const BOUTONS: [&str; 19] = [
    "C", "(", ")", "^", //
    "7", "8", "9", "*", //
    "4", "5", "6", "-", //
    "1", "2", "3", "+", //
    "0", "=", "/",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bouton {
    /// "C" : efface expression ET résultat.
    Effacer,
    /// "=" : évalue l'expression courante.
    Egal,
    /// Tout le reste est ajouté tel quel à l'expression.
    Symbole(char),
}

impl Bouton {
    pub fn from_char(c: char) -> Bouton {
        match c {
            'C' => Bouton::Effacer,
            '=' => Bouton::Egal,
            _ => Bouton::Symbole(c),
        }
    }

    /// Libellé d'un bouton -> commande. Un libellé = un caractère.
    pub fn from_label(label: &str) -> Option<Bouton> {
        let mut it = label.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Some(Bouton::from_char(c)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalculatrice {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie (résultat ou sentinelle, vide tant que rien n'est évalué) ---
    pub resultat: String,
}

impl EtatCalculatrice {
    pub fn appuyer(&mut self, bouton: Bouton) {
        trace!(?bouton, "appui");
        match bouton {
            Bouton::Effacer => self.clear(),
            Bouton::Egal => self.evaluer(),
            Bouton::Symbole(c) => self.expression.push(c),
        }
    }

    /// C : remise à zéro des deux chaînes.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.resultat.clear();
    }

    /// = : le résultat remplace le précédent, l'expression reste affichée.
    pub fn evaluer(&mut self) {
        self.resultat = evaluate(&self.expression);
    }

    /// Rejoue une suite de frappes (un caractère = un bouton).
    pub fn saisir(&mut self, frappes: &str) {
        for c in frappes.chars() {
            self.appuyer(Bouton::from_char(c));
        }
    }
}
