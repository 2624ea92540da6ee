// src/noyau/calcul.rs
//
// Machine à pile : RPN -> f64
// - Nombre : empilé
// - binaire (+ - * / % ^) : b = pop, a = pop, push(a op b)
// - '!' : seul opérateur unaire (postfixé)
//
// Une RPN mal formée (opérande manquant ou en trop, groupe résiduel,
// nombre illisible) est refusée avec MalformedExpression.

use std::f64::consts::PI;

use num_traits::{Float, ToPrimitive, Zero};

use super::erreur::{EvalError, Resultat};
use super::jetons::{Jeton, Operateur};
use super::pile::Pile;

/// Coefficients de Lanczos (jeu à 6 termes + p0).
const LANCZOS: [f64; 7] = [
    1.000000000190015,
    76.18009172947146,
    -86.50532032941677,
    24.01409824083091,
    -1.231739572450155,
    1.208650973866179e-3,
    -5.395239384953e-6,
];

/// Au-delà, n! dépasse f64 : inutile de boucler.
const FACTORIELLE_MAX: u64 = 170;

/// Évalue une suite RPN.
pub fn solve_postfix(rpn: &[Jeton]) -> Resultat<f64> {
    let mut pile: Pile<f64> = Pile::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| EvalError::mal_formee(format!("nombre invalide '{texte}'")))?;
                pile.push(v);
            }

            Jeton::Operateur(op) if op.est_unaire() => {
                let x = depiler(&mut pile, *op)?;
                pile.push(factorielle(x)?);
            }

            Jeton::Operateur(op) => {
                let b = depiler(&mut pile, *op)?;
                let a = depiler(&mut pile, *op)?;
                pile.push(appliquer(*op, a, b)?);
            }

            Jeton::Ouvrante(_) | Jeton::Fermante(_) => {
                return Err(EvalError::mal_formee("groupe inattendu en RPN"));
            }
        }
    }

    let resultat = pile
        .pop()
        .ok_or_else(|| EvalError::mal_formee("RPN vide"))?;
    if !pile.is_empty() {
        return Err(EvalError::mal_formee(format!(
            "{} opérande(s) sans opérateur",
            pile.len()
        )));
    }
    Ok(resultat)
}

fn depiler(pile: &mut Pile<f64>, op: Operateur) -> Resultat<f64> {
    pile.pop().ok_or_else(|| {
        EvalError::mal_formee(format!("opérande manquant pour '{}'", op.symbole()))
    })
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Resultat<f64> {
    Ok(match op {
        Operateur::Addition => a + b,
        Operateur::Soustraction => a - b,
        Operateur::Multiplication => a * b,
        Operateur::Division => {
            if b.is_zero() {
                return Err(EvalError::division_par_zero(format!("{a} / {b}")));
            }
            a / b
        }
        Operateur::Modulo => {
            if b.is_zero() {
                return Err(EvalError::division_par_zero(format!("{a} % {b}")));
            }
            a % b
        }
        Operateur::Puissance => a.powf(b),
        Operateur::Factorielle => {
            return Err(EvalError::mal_formee("'!' appliqué à deux opérandes"));
        }
    })
}

/// n! pour n entier >= 0, Γ(x+1) pour x réel >= 0 non entier.
pub fn factorielle(x: f64) -> Resultat<f64> {
    if x.is_nan() || x < 0.0 {
        return Err(EvalError::domaine(format!(
            "{x}! (pas de factorielle pour un nombre < 0)"
        )));
    }

    if x > FACTORIELLE_MAX as f64 {
        return Ok(f64::infinity());
    }

    if x.fract() != 0.0 {
        return Ok(gamma(x + 1.0));
    }

    let n = match x.to_u64() {
        Some(n) if n <= FACTORIELLE_MAX => n,
        _ => return Ok(f64::infinity()),
    };

    Ok((1..=n).fold(1.0, |acc, i| acc * i as f64))
}

/// Γ(z) par l’approximation de Lanczos :
/// (√(2π)/z) · (p0 + Σ pn/(z+n)) · (z+5.5)^(z+0.5) · e^(-(z+5.5))
pub fn gamma(z: f64) -> f64 {
    let g1 = (2.0 * PI).sqrt() / z;

    let g2 = LANCZOS[0]
        + LANCZOS[1..]
            .iter()
            .enumerate()
            .map(|(n, p)| p / (z + (n + 1) as f64))
            .sum::<f64>();

    let g3 = (z + 5.5).powf(z + 0.5);
    let g4 = (-(z + 5.5)).exp();

    g1 * g2 * g3 * g4
}
