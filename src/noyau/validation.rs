// src/noyau/validation.rs
//
// Pré-contrôle syntaxique (volontairement faible).
// - opérateur seul => refus
// - deux opérateurs collés (avec ou sans chiffres autour) => refus
//
// IMPORTANT : ni l'équilibre des parenthèses ni l'alphabet ne sont vérifiés
// ici. Ces erreurs sortent plus tard, dans rpn.rs (pile d'opérateurs).

use once_cell::sync::Lazy;
use regex::Regex;

use super::erreur::ErreurSyntaxe;
use super::jetons::normalize;

static OPERATEUR_SEUL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+\-*/^]$").unwrap());

// Un seul motif combiné, testé sur toute la chaîne.
static DOUBLE_SIGNE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+\-*/^]{2,}|[0-9]+[+\-*/^]{2,}|[+\-*/^]{2,}[0-9]+").unwrap()
});

/// Validation avec motif de refus.
pub fn valider(expression: &str) -> Result<(), ErreurSyntaxe> {
    let s = normalize(expression);

    if OPERATEUR_SEUL_RE.is_match(&s) {
        // is_match garantit exactement un caractère
        let c = s.chars().next().unwrap_or_default();
        return Err(ErreurSyntaxe::OperateurSeul(c));
    }

    if let Some(m) = DOUBLE_SIGNE_RE.find(&s) {
        return Err(ErreurSyntaxe::DoubleSigne(m.as_str().to_string()));
    }

    Ok(())
}

pub fn is_valid(expression: &str) -> bool {
    valider(expression).is_ok()
}
