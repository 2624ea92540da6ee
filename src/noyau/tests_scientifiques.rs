//! Tests scientifiques (campagne) : propriétés observables du moteur, de bout en bout.
//!
//! - précédence, multiplication implicite, signes
//! - familles d’erreurs (structure, variable, division, domaine, ressources)
//! - fonctions intégrées et étendues, radians/degrés
//! - aller-retour infixe -> RPN -> valeur
//! - budget temps global sur les lots

use std::time::{Duration, Instant};

use rstest::rstest;

use super::contexte::Contexte;
use super::erreur::EvalError;
use super::jetons::format_tokens;
use super::trig::Angle;
use super::variables::Variables;

fn eval_ok(expr: &str, vars: impl Into<Variables>) -> f64 {
    Contexte::new()
        .solve(expr, vars)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str, vars: impl Into<Variables>) -> EvalError {
    match Contexte::new().solve(expr, vars) {
        Ok(v) => panic!("expr={expr:?} : erreur attendue, obtenu {v}"),
        Err(e) => e,
    }
}

fn assert_proche(expr: &str, obtenu: f64, attendu: f64) {
    assert!(
        (obtenu - attendu).abs() < 1e-9,
        "expr={expr:?} obtenu={obtenu} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("3 * (7 - 3)", 12.0)]
#[case("3 + 4 - 2", 5.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("16 / 4 / 2", 2.0)]
#[case("7 % 3", 1.0)]
#[case("-7 % 3", -1.0)]
#[case("[2 + 3] * 2", 10.0)]
#[case("-(2 + 3)", -5.0)]
#[case("--3", 3.0)]
#[case("+5", 5.0)]
#[case("(2)(3)", 6.0)]
#[case("2/-(4)", -0.5)]
#[case("2^-(3)", 0.125)]
#[case("8%-(3)", 2.0)]
#[case("2*-(3)", -6.0)]
#[case("1/-sqrt(4)", -0.5)]
#[case("2^-abs(3)", 0.125)]
#[case("-(2)^2", -4.0)]
#[case("0.5 + .25", 0.75)]
fn sci_arithmetique(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr, Variables::Aucune), attendu, "expr={expr:?}");
}

#[test]
fn sci_puissance_gauche_a_droite() {
    // niveau haut évalué de gauche à droite : (2^3)^2
    assert_eq!(eval_ok("2^3^2", Variables::Aucune), 64.0);
    assert_eq!(eval_ok("2^-1", Variables::Aucune), 0.5);
}

#[rstest]
#[case("2e3", 2000.0)]
#[case("2e-3", 0.002)]
#[case("1.5E+2", 150.0)]
#[case("2e3 + 1", 2001.0)]
fn sci_notation_scientifique(#[case] expr: &str, #[case] attendu: f64) {
    assert_proche(expr, eval_ok(expr, Variables::Aucune), attendu);
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_multiplication_implicite_variables() {
    assert_eq!(eval_ok("2(4x)", [("x", 3.0)]), 24.0);
    assert_eq!(eval_ok("2a+a", [("a", 5.0)]), 15.0);
    assert_eq!(eval_ok("x(y)", [("x", 3.0), ("y", 4.0)]), 12.0);
    assert_eq!(eval_ok("2x^2", 3.0), 18.0);
}

#[test]
fn sci_scalaire_zero_et_negatif() {
    assert_eq!(eval_ok("x + 1", 0.0), 1.0);
    assert_eq!(eval_ok("2x", -3.0), -6.0);
    assert_eq!(eval_ok("5 - x", -3.0), 8.0);
    assert_eq!(eval_ok("x^2", -3.0), 9.0);
}

#[test]
fn sci_variable_inconnue() {
    match eval_err("2 + y", [("x", 1.0)]) {
        EvalError::UndefinedVariable { nom, expression } => {
            assert_eq!(nom, "y");
            assert_eq!(expression, "2 + y");
        }
        autre => panic!("attendu UndefinedVariable, obtenu {autre:?}"),
    }
    assert!(matches!(
        eval_err("x", Variables::Aucune),
        EvalError::UndefinedVariable { .. }
    ));
}

#[test]
fn sci_constantes() {
    assert_proche("pi", eval_ok("pi", Variables::Aucune), std::f64::consts::PI);
    assert_proche("2e", eval_ok("2e", Variables::Aucune), 2.0 * std::f64::consts::E);
    // les constantes ne passent pas par le scalaire
    assert_proche("PI", eval_ok("PI", 10.0), std::f64::consts::PI);
}

/* ------------------------ Erreurs ------------------------ */

#[rstest]
#[case("3/0")]
#[case("3%0")]
#[case("1 / (2 - 2)")]
fn sci_division_par_zero(#[case] expr: &str) {
    let e = eval_err(expr, Variables::Aucune);
    assert!(matches!(e, EvalError::DivisionByZero { .. }), "expr={expr:?} {e:?}");
    assert_eq!(e.expression(), expr);
}

#[rstest]
#[case("-4!")]
#[case("ln(0)")]
#[case("ln(-1)")]
#[case("sqrt(-4)")]
#[case("log(0)")]
fn sci_domaine(#[case] expr: &str) {
    let e = eval_err(expr, Variables::Aucune);
    assert!(matches!(e, EvalError::DomainError { .. }), "expr={expr:?} {e:?}");
}

#[rstest]
#[case("(2+(3*4)")]
#[case("[2+[3*4]")]
#[case("")]
#[case("2 +* 3")]
#[case("2 +")]
#[case("1.2.3")]
#[case("2 # 3")]
#[case("sqrt()")]
fn sci_mal_formee(#[case] expr: &str) {
    let e = eval_err(expr, Variables::Aucune);
    assert!(
        matches!(e, EvalError::MalformedExpression { .. }),
        "expr={expr:?} {e:?}"
    );
}

#[test]
fn sci_codes_distincts() {
    let codes = [
        eval_err("(", Variables::Aucune).code(),
        eval_err("y", Variables::Aucune).code(),
        eval_err("1/0", Variables::Aucune).code(),
        eval_err("sqrt(-1)", Variables::Aucune).code(),
        eval_err("sum(x,1,1e9)", Variables::Aucune).code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

/* ------------------------ Fonctions ------------------------ */

#[rstest]
#[case("sin(pi/2)", 1.0)]
#[case("cos(pi)", -1.0)]
#[case("tan(0)", 0.0)]
#[case("sec(0)", 1.0)]
#[case("abs(-2.5)", 2.5)]
#[case("sqrt(16) + 1", 5.0)]
#[case("ln(e)", 1.0)]
#[case("2sqrt(9)", 6.0)]
#[case("sqrt(abs(-16))", 4.0)]
fn sci_fonctions_integrees(#[case] expr: &str, #[case] attendu: f64) {
    assert_proche(expr, eval_ok(expr, Variables::Aucune), attendu);
}

#[test]
fn sci_degres() {
    let ctx = Contexte::new().avec_angle(Angle::Degres);
    assert_proche("sin(90)", ctx.solve("sin(90)", Variables::Aucune).unwrap(), 1.0);
    assert_proche("cos(180)", ctx.solve("cos(180)", Variables::Aucune).unwrap(), -1.0);
    assert!(matches!(
        ctx.solve("csc(0)", Variables::Aucune),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn sci_factorielles() {
    assert_eq!(eval_ok("5!", Variables::Aucune), 120.0);
    assert_eq!(eval_ok("0!", Variables::Aucune), 1.0);
    assert_eq!(eval_ok("3!-1", Variables::Aucune), 5.0);
    assert_eq!(eval_ok("2^3!", Variables::Aucune), 40320.0);

    let g = eval_ok("3.5!", Variables::Aucune);
    assert!((11.63..=11.64).contains(&g), "3.5! = {g}");

    assert!(eval_ok("171!", Variables::Aucune).is_infinite());
}

#[test]
fn sci_sommes() {
    assert_eq!(eval_ok("sum(x,1,3)", Variables::Aucune), 6.0);
    assert_eq!(eval_ok("sum(sum(x,1,2)*x,1,2)", Variables::Aucune), 9.0);
    assert_eq!(eval_ok("1 + sum(x, 1, 4) * 2", Variables::Aucune), 21.0);
}

#[test]
fn sci_fonction_prefixee_par_variable() {
    // "xsin(0)" : x * sin(0)
    assert_eq!(eval_ok("2xsin(0)", [("x", 3.0)]), 0.0);
    assert_eq!(eval_ok("2xcos(0)", [("x", 3.0)]), 6.0);
}

/* ------------------------ Aller-retour RPN ------------------------ */

#[rstest]
#[case("2 + 3 * 4")]
#[case("2(4x)")]
#[case("-4.5 * (x - 1) / 2")]
#[case("sqrt(x) + x!")]
#[case("sum(x,1,3) % 4")]
fn sci_aller_retour_rpn(#[case] expr: &str) {
    let ctx = Contexte::new();
    let direct = ctx.solve(expr, 4.0).unwrap();
    let rpn = ctx.to_postfix(expr, 4.0).unwrap();
    let indirect = ctx.solve_postfix(&rpn).unwrap();
    assert_eq!(direct, indirect, "expr={expr:?} rpn={}", format_tokens(&rpn));
}

#[test]
fn sci_rpn_visible() {
    let rpn = Contexte::new().to_postfix("2 + 3 * 4", Variables::Aucune).unwrap();
    assert_eq!(format_tokens(&rpn), "2 3 4 * +");
}

/* ------------------------ Lots ------------------------ */

#[test]
fn sci_lot_polynome_budget() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let ctx = Contexte::new();

    for i in -50..=50 {
        budget(t0, max);
        let x = f64::from(i) / 10.0;
        let v = ctx.solve("3x^2 - 2x + 1", x).unwrap();
        assert_proche("3x^2 - 2x + 1", v, 3.0 * x * x - 2.0 * x + 1.0);
    }
}

#[test]
fn sci_contexte_partage_entre_threads() {
    let ctx = std::sync::Arc::new(Contexte::new());
    let fils: Vec<_> = (1..=4)
        .map(|n| {
            let ctx = ctx.clone();
            std::thread::spawn(move || ctx.solve("sum(x,1,n)", [("n", f64::from(n))]))
        })
        .collect();

    let resultats: Vec<f64> = fils
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(resultats, vec![1.0, 3.0, 6.0, 10.0]);
}
