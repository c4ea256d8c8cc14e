// src/noyau/rpn.rs
//
// Shunting-yard : infix -> RPN (postfix)
//
// Règles:
// - Operande : sortie directe
// - '(' : empilée sans condition (barrière pour les opérateurs)
// - ')' : dépile jusqu'à '(' ; pile vide avant '(' => invalide
// - opérateur : dépile tant que précédence(sommet) >= précédence(courant), puis empile
//   (comparaison >= pour TOUS les opérateurs : '^' est donc associatif à gauche)
// - fin : vide la pile ; une '(' restante => invalide

use tracing::trace;

use super::erreur::ErreurRpn;
use super::jetons::{format_tokens, normalize, tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Op(op) => op.precedence(),
        // symbole hors alphabet : plus faible que tout, il finira rejeté par pile.rs
        _ => 0,
    }
}

/// Convertit une suite de jetons (ordre infix) en RPN.
///
/// Exemple:
///   tokens: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurRpn> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for (position, tok) in tokens.iter().cloned().enumerate() {
        match tok {
            Tok::Operande(_) => out.push(tok),

            Tok::ParG => ops.push(tok),

            Tok::ParD => loop {
                match ops.pop() {
                    Some(Tok::ParG) => break,
                    Some(top) => out.push(top),
                    None => return Err(ErreurRpn::ParentheseFermanteOrpheline { position }),
                }
            },

            Tok::Op(_) | Tok::Inconnu(_) => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::ParG) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::ParG) {
            return Err(ErreurRpn::ParentheseOuvranteNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Infix brut -> postfix texte (jetons séparés par un espace, sans espace final).
pub fn to_postfix(expression: &str) -> Result<String, ErreurRpn> {
    let jetons = tokenize(&normalize(expression));
    let rpn = to_rpn(&jetons)?;
    let texte = format_tokens(&rpn);
    trace!(%texte, "postfix");
    Ok(texte)
}
