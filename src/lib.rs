// src/lib.rs
//
// Calculatrice sûre : évaluation d’expressions arithmétiques saisies par l’utilisateur,
// sans jamais exécuter de code.
//
// Chaîne de traitement :
//   infixe -> pré-contrôle -> résolution (fonctions, variables) -> RPN -> f64
//
// Point d’entrée simple : `solve(expr, vars)` (contexte par défaut, partagé).
// Réglages (degrés, limites, fonctions étendues) : construire un `Contexte`.

//! Évaluateur d’expressions arithmétiques sûr.
//!
//! ```
//! use calculatrice_sure::{solve, Contexte, Angle, Variables};
//!
//! assert_eq!(solve("2 + 3 * 4", Variables::Aucune).unwrap(), 14.0);
//! assert_eq!(solve("2(4x)", [("x", 3.0)]).unwrap(), 24.0);
//!
//! let ctx = Contexte::new().avec_angle(Angle::Degres);
//! assert!((ctx.solve("sin(90)", Variables::Aucune).unwrap() - 1.0).abs() < 1e-12);
//! ```

use std::sync::OnceLock;

pub mod noyau;

pub use noyau::{
    factorielle, format_tokens, gamma, separer_arguments, Angle, Appel, Contexte, EvalError,
    Extensions, Fonction, Groupe, Jeton, Operateur, Pile, Resolveur, Resultat, TrigFn,
    Variables,
};

static CONTEXTE_DEFAUT: OnceLock<Contexte> = OnceLock::new();

/// Contexte partagé par les fonctions libres : radians, `sum` et `log`, limites par défaut.
pub fn contexte_defaut() -> &'static Contexte {
    CONTEXTE_DEFAUT.get_or_init(Contexte::new)
}

/// Évalue une expression infixe avec le contexte par défaut.
pub fn solve(expression: &str, variables: impl Into<Variables>) -> Resultat<f64> {
    contexte_defaut().solve(expression, variables)
}

/// Évalue une RPN déjà construite.
pub fn solve_postfix(rpn: &[Jeton]) -> Resultat<f64> {
    contexte_defaut().solve_postfix(rpn)
}

/// Infixe -> RPN (fonctions et variables déjà remplacées par leurs valeurs).
pub fn to_postfix(expression: &str, variables: impl Into<Variables>) -> Resultat<Vec<Jeton>> {
    contexte_defaut().to_postfix(expression, variables)
}
