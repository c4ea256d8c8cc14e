// src/noyau/operateur.rs
//
// Alphabet des opérateurs binaires + table de précédence.
//
// Règle retenue pour la conversion : TOUS les opérateurs sont traités
// associatifs à gauche, y compris '^' (2^3^2 = (2^3)^2 = 64).

use num_traits::Float;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    #[cfg(test)]
    const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    pub fn from_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    /// Jeton postfix -> opérateur (un seul caractère exactement).
    pub fn from_jeton(s: &str) -> Option<Operateur> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Operateur::from_char(c),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> i32 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    /// a <op> b. La division par zéro est une erreur explicite,
    /// '^' suit la sémantique de `powf` (exposants fractionnaires / négatifs).
    pub fn appliquer<F: Float>(self, a: F, b: F) -> Result<F, ErreurEval> {
        Ok(match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                a / b
            }
            Operateur::Puissance => a.powf(b),
        })
    }
}
