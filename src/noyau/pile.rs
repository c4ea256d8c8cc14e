// src/noyau/pile.rs
//
// Évaluation postfix sur une pile d'opérandes flottantes.
//
// Invariants (vérifiés, jamais de panique) :
// - au moins deux valeurs avant chaque réduction binaire
// - exactement une valeur à la fin

use std::str::FromStr;

use num_traits::Float;

use super::erreur::ErreurEval;
use super::operateur::Operateur;

/// Opérande numérique : commence par un chiffre ASCII et se lit comme un flottant.
/// ("1e3" passe, "ab" / "inf" / "nan" non : pas de variables déguisées.)
/// Un littéral qui déborde ("1e400" -> inf) est refusé dès la lecture.
fn lire_operande<F: Float + FromStr>(jeton: &str) -> Result<Option<F>, ErreurEval> {
    if !jeton.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(None);
    }
    match jeton.parse::<F>() {
        Ok(v) if !v.is_finite() => Err(ErreurEval::OperandeHorsBornes(jeton.to_string())),
        Ok(v) => Ok(Some(v)),
        Err(_) => Ok(None),
    }
}

fn ressemble_operande(jeton: &str) -> bool {
    !jeton.is_empty() && jeton.chars().all(char::is_alphanumeric)
}

/// Évalue une suite de jetons postfix.
pub fn eval_postfix<F, S>(jetons: &[S]) -> Result<F, ErreurEval>
where
    F: Float + FromStr,
    S: AsRef<str>,
{
    let mut st: Vec<F> = Vec::with_capacity(jetons.len());

    for (position, jeton) in jetons.iter().enumerate() {
        let jeton = jeton.as_ref();

        if let Some(v) = lire_operande::<F>(jeton)? {
            st.push(v);
            continue;
        }

        // forme d'opérande mais illisible : lettres (ex: "3+ab")
        if ressemble_operande(jeton) {
            return Err(ErreurEval::OperandeNonNumerique(jeton.to_string()));
        }

        let op = Operateur::from_jeton(jeton)
            .ok_or_else(|| ErreurEval::OperateurInconnu(jeton.to_string()))?;

        let insuffisante = || ErreurEval::PileInsuffisante {
            jeton: jeton.to_string(),
            position,
        };
        let b = st.pop().ok_or_else(insuffisante)?;
        let a = st.pop().ok_or_else(insuffisante)?;

        st.push(op.appliquer(a, b)?);
    }

    match st.len() {
        0 => Err(ErreurEval::ExpressionVide),
        1 => st.pop().ok_or(ErreurEval::ExpressionVide),
        n => Err(ErreurEval::PileNonReduite(n)),
    }
}
