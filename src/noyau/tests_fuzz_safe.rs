//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique
//!   * position d'erreur dans [0, longueur]
//!   * un échec ne touche ni la mémoire, ni le mode d'angle, ni last_result
//!   * un succès est fini et devient last_result

use std::time::{Duration, Instant};

use super::etat::CalculatorState;
use super::eval::evaluate;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
    fn choix<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

const UNAIRES: [&str; 14] = [
    "sin", "cos", "tan", "sqrt", "ln", "log", "exp", "abs", "asin", "sinh", "gamma", "fact",
    "csc", "floor",
];
const BINAIRES: [&str; 7] = ["pow", "atan2", "mod", "ncr", "gcd", "logb", "root"];
const ATOMES: [&str; 8] = ["pi", "e", "φ", "m", "ans", "√2", "ln2", "0"];
const OPS: [&str; 6] = ["+", "-", "*", "/", "^", "%"];

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        2 => format!("{}e{}", rng.pick(9) + 1, rng.pick(5)),
        _ => format!("{}", rng.pick(200)),
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    if rng.coin() {
        gen_nombre(rng)
    } else {
        rng.choix(&ATOMES).to_string()
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(7) {
        0 => gen_atome(rng),
        1 | 2 => format!(
            "{} {} {}",
            gen_expr(rng, depth - 1),
            rng.choix(&OPS),
            gen_expr(rng, depth - 1)
        ),
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => format!("-{}", gen_expr(rng, depth - 1)),
        5 => format!("{}({})", rng.choix(&UNAIRES), gen_expr(rng, depth - 1)),
        _ => format!(
            "{}({}, {})",
            rng.choix(&BINAIRES),
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Abîme une expression valide : caractère parasite, parenthèse en moins, etc.
fn abime(rng: &mut Rng, expr: &str) -> String {
    let mut s = expr.to_string();
    match rng.pick(5) {
        0 => s.push('('),
        1 => s.push(')'),
        2 => s.insert(0, '$'),
        3 => s.push_str(" ,"),
        _ => {
            if let Some(idx) = s.find('(') {
                s.remove(idx);
            } else {
                s.push('*');
            }
        }
    }
    s
}

/* ------------------------ Vérification d'une évaluation ------------------------ */

fn verifie_invariants(etat: &mut CalculatorState, expr: &str) -> bool {
    let memoire = etat.memory;
    let degres = etat.angle_in_degrees;
    let dernier = etat.last_result;

    match evaluate(expr, etat) {
        Ok(v) => {
            assert!(v.is_finite(), "résultat non fini: expr={expr:?} v={v}");
            assert_eq!(etat.last_result, v, "expr={expr:?}");
            assert_eq!(etat.memory, memoire);
            true
        }
        Err(e) => {
            assert!(
                e.position <= expr.len(),
                "position hors bornes: expr={expr:?} err={e:?}"
            );
            assert!(!e.message.is_empty());
            assert_eq!(etat.memory, memoire, "mémoire touchée: expr={expr:?}");
            assert_eq!(etat.angle_in_degrees, degres);
            assert_eq!(etat.last_result, dernier, "last_result touché: expr={expr:?}");
            false
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_et_mix() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut etat = CalculatorState::new();
    etat.memory_store(2.5);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..400 {
        budget(t0, max);

        etat.angle_in_degrees = i % 3 != 0;
        let expr = gen_expr(&mut rng, 4);
        if verifie_invariants(&mut etat, &expr) {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
}

#[test]
fn fuzz_safe_expressions_abimees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut etat = CalculatorState::new();

    for _ in 0..200 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let expr = abime(&mut rng, &base);
        verifie_invariants(&mut etat, &expr);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..100 {
        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let mut etat1 = CalculatorState::new();
        let mut etat2 = CalculatorState::new();
        assert_eq!(evaluate(&ea, &mut etat1), evaluate(&eb, &mut etat2));
    }
}

#[test]
fn fuzz_safe_octets_arbitraires() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let alphabet: Vec<char> = "0123456789.eE+-*/^%(),_ abcxyzπφ√$#é\t".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);
    let mut etat = CalculatorState::new();

    for _ in 0..300 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let expr: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();
        verifie_invariants(&mut etat, &expr);
    }
}

#[test]
fn fuzz_safe_imbrication_profonde_sans_pile() {
    // bien au-delà du garde-fou : doit échouer proprement, pas déborder la pile
    let expr = format!("{}1{}", "sin(".repeat(5_000), ")".repeat(5_000));
    let mut etat = CalculatorState::new();
    assert!(!verifie_invariants(&mut etat, &expr));

    let expr = "(".repeat(100_000);
    assert!(!verifie_invariants(&mut etat, &expr));
}

#[test]
fn fuzz_safe_longue_somme_plate() {
    // pas de récursion pour une somme plate : 10 000 termes passent
    let expr = vec!["0.5"; 10_000].join(" + ");
    let mut etat = CalculatorState::new();
    assert_eq!(evaluate(&expr, &mut etat), Ok(5_000.0));
}
