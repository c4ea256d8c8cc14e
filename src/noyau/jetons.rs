// src/noyau/jetons.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::operateur::Operateur;

static ESPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Suite maximale de caractères alphanumériques (chiffres ET lettres).
    // NOTE: les lettres passent ici ; c'est pile.rs qui refusera "ab" comme opérande.
    Operande(String),

    Op(Operateur),

    // Tout autre symbole ('.', '%', ...) : traité comme un opérateur sans précédence.
    Inconnu(char),

    ParG,
    ParD,
}

/// Retire toutes les suites d'espaces. Entrée vide => sortie vide (légal).
pub fn normalize(s: &str) -> String {
    ESPACES_RE.replace_all(s, "").into_owned()
}

/// Découpe une chaîne déjà normalisée en jetons.
/// Ne peut pas échouer : la structure est contrôlée plus tard (rpn.rs).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_alphanumeric() {
            let start = i;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            out.push(Tok::Operande(chars[start..i].iter().collect()));
            continue;
        }

        let tok = match c {
            '(' => Tok::ParG,
            ')' => Tok::ParD,
            _ => match Operateur::from_char(c) {
                Some(op) => Tok::Op(op),
                None => Tok::Inconnu(c),
            },
        };
        out.push(tok);
        i += 1;
    }

    out
}

/// Liste de jetons en texte, séparés par un espace (forme postfix publique).
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Operande(s) => s.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Inconnu(c) => c.to_string(),
            Tok::ParG => "(".to_string(),
            Tok::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
