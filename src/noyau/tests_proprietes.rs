//! Tests de propriétés : le pipeline postfix contre un évaluateur de référence.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence : descente récursive, même grammaire, TOUT associatif à gauche
//!   (donc mêmes arbres => mêmes flottants, comparaison exacte des chaînes)

use std::time::{Duration, Instant};

use super::erreur::SENTINELLE_ERREUR;
use super::format::format_resultat;
use super::{evaluate, to_postfix};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

// expr  := terme (('+'|'-') terme)*
// terme := puiss (('*'|'/') puiss)*
// puiss := atome ('^' atome)*          <- gauche, comme le convertisseur
// atome := nombre | '(' expr ')'
struct Reference<'a> {
    s: &'a [u8],
    i: usize,
}

impl Reference<'_> {
    fn evaluer(s: &str) -> Option<f64> {
        let mut p = Reference { s: s.as_bytes(), i: 0 };
        let v = p.expr()?;
        if p.i != p.s.len() || !v.is_finite() {
            return None;
        }
        Some(v)
    }

    fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut v = self.terme()?;
        while let Some(c @ (b'+' | b'-')) = self.peek() {
            self.i += 1;
            let d = self.terme()?;
            v = if c == b'+' { v + d } else { v - d };
        }
        Some(v)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut v = self.puiss()?;
        while let Some(c @ (b'*' | b'/')) = self.peek() {
            self.i += 1;
            let d = self.puiss()?;
            if c == b'/' && d == 0.0 {
                return None;
            }
            v = if c == b'*' { v * d } else { v / d };
        }
        Some(v)
    }

    fn puiss(&mut self) -> Option<f64> {
        let mut v = self.atome()?;
        while self.peek() == Some(b'^') {
            self.i += 1;
            let d = self.atome()?;
            v = v.powf(d);
        }
        Some(v)
    }

    fn atome(&mut self) -> Option<f64> {
        if self.peek() == Some(b'(') {
            self.i += 1;
            let v = self.expr()?;
            if self.peek() != Some(b')') {
                return None;
            }
            self.i += 1;
            return Some(v);
        }
        let debut = self.i;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.i += 1;
        }
        std::str::from_utf8(&self.s[debut..self.i]).ok()?.parse().ok()
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers surtout (0 inclus : division par zéro voulue), parfois multi-chiffres
    match rng.pick(4) {
        0 => format!("{}", rng.pick(200)),
        _ => format!("{}", rng.pick(10)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let op = match rng.pick(9) {
        0 | 1 => '+',
        2 | 3 => '-',
        4 | 5 => '*',
        6 | 7 => '/',
        _ => '^',
    };

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(3) {
        0 => gen_nombre(rng),
        1 => format!("{a}{op}{b}"),
        _ => format!("({a}){op}({b})"),
    }
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn prop_postfix_egale_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let attendu = match Reference::evaluer(&expr) {
            Some(v) => {
                seen_ok += 1;
                format_resultat(v)
            }
            None => {
                seen_err += 1;
                SENTINELLE_ERREUR.to_string()
            }
        };

        assert_eq!(evaluate(&expr), attendu, "expr={expr:?}");
    }

    // On veut voir un mix des deux, sinon la génération ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: génération trop “sage”");
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(0xBADC0DE_u64);
    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 3);
        assert_eq!(evaluate(&expr), evaluate(&expr), "expr={expr:?}");
    }
}

#[test]
fn prop_parenthese_retiree_invalide() {
    let mut rng = Rng::new(0x5EED_u64);
    let mut testes = 0usize;

    for _ in 0..200 {
        let expr = gen_expr(&mut rng, 4);
        let positions: Vec<usize> = expr
            .char_indices()
            .filter(|(_, c)| *c == '(' || *c == ')')
            .map(|(i, _)| i)
            .collect();
        if positions.is_empty() {
            continue;
        }

        let k = positions[rng.pick(positions.len() as u32) as usize];
        let mut casse = expr.clone();
        casse.remove(k);

        assert!(to_postfix(&casse).is_err(), "expr={casse:?}");
        assert_eq!(evaluate(&casse), SENTINELLE_ERREUR, "expr={casse:?}");
        testes += 1;
    }

    assert!(testes > 20, "trop peu d'expressions parenthésées: {testes}");
}

#[test]
fn prop_somme_balancee_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1", 800);
    assert_eq!(evaluate(&expr), "800");

    // imbrication profonde : la conversion est itérative, pas de récursion
    let profond = format!("{}7{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(evaluate(&profond), "7");

    budget(t0, max);
}

#[test]
fn reference_sanity() {
    assert_eq!(Reference::evaluer("2^3^2"), Some(64.0));
    assert_eq!(Reference::evaluer("(2+3)*4"), Some(20.0));
    assert_eq!(Reference::evaluer("1/0"), None);
    assert_eq!(Reference::evaluer("(2+3"), None);
}
