// src/noyau/erreur.rs
//
// Erreurs typées, une famille par étape du pipeline :
// - ErreurSyntaxe : pré-contrôle (validation.rs)
// - ErreurRpn     : structure / parenthèses (rpn.rs)
// - ErreurEval    : pile d'opérandes (pile.rs)
// - ErreurCalcul  : agrégat vu par l'orchestrateur (eval.rs)
//
// Aucune de ces erreurs ne sort du noyau : evaluate() les rabat toutes
// sur SENTINELLE_ERREUR.

use thiserror::Error;

/// Chaîne publique renvoyée à l'UI pour toute erreur, quelle qu'elle soit.
pub const SENTINELLE_ERREUR: &str = "Error!";

/// Marqueur interne du convertisseur (différent de la sentinelle publique).
pub const MARQUEUR_INVALIDE: &str = "Expression invalide";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("opérateur seul: '{0}'")]
    OperateurSeul(char),
    #[error("double signe: {0:?}")]
    DoubleSigne(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurRpn {
    #[error("{}: ')' sans '(' (position {position})", MARQUEUR_INVALIDE)]
    ParentheseFermanteOrpheline { position: usize },
    #[error("{}: '(' non fermée", MARQUEUR_INVALIDE)]
    ParentheseOuvranteNonFermee,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    ExpressionVide,
    #[error("pile insuffisante pour '{jeton}' (jeton {position})")]
    PileInsuffisante { jeton: String, position: usize },
    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(String),
    #[error("opérande non numérique: {0:?}")]
    OperandeNonNumerique(String),
    #[error("opérande hors bornes: {0:?}")]
    OperandeHorsBornes(String),
    #[error("division par zéro")]
    DivisionParZero,
    #[error("pile non réduite: {0} valeurs restantes")]
    PileNonReduite(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),
    #[error(transparent)]
    Structure(#[from] ErreurRpn),
    #[error(transparent)]
    Evaluation(#[from] ErreurEval),
    #[error("résultat non fini: {0}")]
    ResultatNonFini(f64),
}
