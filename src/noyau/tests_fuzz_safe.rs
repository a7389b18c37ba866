//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - imbrication des parenthèses bornée, hauteur d’arbre libre
//! - budget temps global
//! - invariant clé : un caractère hors liste blanche => Failure, quelle que soit sa position

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::{evaluate, evaluer, EvaluationResult, Limites};

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // 0 inclus : la division par zéro doit arriver naturellement
    let n = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{n}.5"),
        1 => format!("-{n}"),
        _ => format!("{n}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("({a}*{b})"),
        4 => format!("({a}/{b})"),
        _ => format!("-({a})"),
    }
}

/// Bruit pur tiré de la liste blanche : syntaxe souvent invalide, jamais de panique.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

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
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let l = Limites::default();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        // même entrée => même sortie
        assert_eq!(evaluate(&expr), evaluate(&expr), "expr={expr:?}");

        match evaluer(&expr, &l) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // expressions bien formées : seule la division par zéro peut échouer
                assert_eq!(e, ErreurCalcul::DivisionParZero, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for i in 0..400 {
        budget(t0, max);

        let s = gen_bruit(&mut rng, 1 + i % 24);
        // seul compte : pas de panique, et un résultat cohérent
        if let EvaluationResult::Success(v) = evaluate(&s) {
            assert!(!v.is_empty(), "s={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_caractere_interdit_partout() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let base = "(12+3.5)*4/2-1";
    let intrus = ['a', 'x', '_', '^', '%', ',', '=', ';', '"', 'é', '√', '\u{0}'];

    for c in intrus {
        for pos in 0..=base.len() {
            budget(t0, max);

            let mut s = base.to_string();
            s.insert(pos, c);
            assert_eq!(evaluate(&s), EvaluationResult::Failure, "s={s:?}");
        }
    }

    // sanity : sans intrus, c’est valide
    assert!(evaluate(base).is_success());
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1.5", 800);
    budget(t0, max);

    // 800 * 1.5 = 1200, arbre de hauteur ~11
    assert_eq!(evaluate(&expr), EvaluationResult::Success("1200".into()));
}

#[test]
fn fuzz_safe_longues_chaines_sans_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let l = Limites::default();

    // chaîne plate longue : arbre haut, parcouru sans récursion
    let plate = vec!["1"; 5000].join("+");
    assert_eq!(evaluer(&plate, &l), Ok("5000".to_string()));

    // signes unaires en cascade, jusqu’à la longueur max
    let signes = format!("{}1", "-".repeat(9_999));
    assert_eq!(evaluer(&signes, &l), Ok("-1".to_string()));

    // mélange plat + signes : "1--1--1..."
    let mixte = vec!["1"; 3000].join("--");
    assert_eq!(evaluer(&mixte, &l), Ok("3000".to_string()));
    budget(t0, max);

    // imbrication des parenthèses : seule profondeur bornée
    let parens = format!("{}1{}", "(".repeat(201), ")".repeat(201));
    assert_eq!(evaluer(&parens, &l), Err(ErreurCalcul::TropProfond));

    // au-delà de la longueur max : refus avant tokenisation
    let trop_long = "1".repeat(10_001);
    assert!(matches!(
        evaluer(&trop_long, &l),
        Err(ErreurCalcul::TropLong { .. })
    ));
}
