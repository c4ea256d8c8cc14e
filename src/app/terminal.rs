// src/app/terminal.rs
//
// Vue terminal (remplace le rendu graphique)
// ------------------------------------------
// - une ligne lue = une suite de frappes ("C" efface, "=" évalue)
// - après chaque ligne : expression, puis résultat s'il existe
// - option démarche : forme normalisée + postfix (ou l'erreur typée)
//
// Générique sur BufRead/Write pour être testée sans vrai terminal.

use std::io::{self, BufRead, Write};

use super::etat::EtatCalculatrice;
use crate::noyau::evaluate_detaille;

pub fn afficher<W: Write>(
    sortie: &mut W,
    etat: &EtatCalculatrice,
    demarche: bool,
) -> io::Result<()> {
    writeln!(sortie, "{}", etat.expression)?;
    if etat.resultat.is_empty() {
        return Ok(());
    }
    writeln!(sortie, "= {}", etat.resultat)?;

    if demarche {
        match evaluate_detaille(&etat.expression) {
            Ok(c) => {
                writeln!(sortie, "  normalisée : {}", c.normalisee)?;
                writeln!(sortie, "  postfix    : {}", c.postfix)?;
            }
            Err(e) => writeln!(sortie, "  erreur     : {e}")?,
        }
    }
    Ok(())
}

/// Boucle de saisie : l'état vit ici, le noyau reste sans état.
pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W, demarche: bool) -> io::Result<()> {
    let mut etat = EtatCalculatrice::default();
    for ligne in entree.lines() {
        etat.saisir(&ligne?);
        afficher(&mut sortie, &etat, demarche)?;
    }
    sortie.flush()
}
