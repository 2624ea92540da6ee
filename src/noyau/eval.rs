//! Noyau : évaluation (pipeline réel)
//!
//! pré-contrôle -> résolution (fonctions étendues, intégrées, notation scientifique,
//! variables) -> RPN -> valeur
//!
//! La résolution rappelle ce pipeline pour chaque argument de fonction
//! (via `Appel::solve`), un niveau d’imbrication plus bas.

use super::calcul::solve_postfix;
use super::contexte::Appel;
use super::erreur::Resultat;
use super::jetons::{format_tokens, Jeton};
use super::resolution::resoudre;
use super::rpn::{to_rpn, verifier_infixe};
use super::variables::Variables;

/// Texte infixe purement numérique (plus de noms, plus d’espaces).
pub(crate) fn infix_numerique(
    appel: &Appel<'_>,
    infixe: &str,
    variables: &Variables,
) -> Resultat<String> {
    // contrôle AVANT toute arithmétique (même dans un argument de fonction)
    verifier_infixe(infixe)?;

    let compact: String = infixe.chars().filter(|c| !c.is_whitespace()).collect();
    resoudre(appel, &compact, variables)
}

/// Résolution + conversion, sans évaluer.
pub(crate) fn postfix_of(
    appel: &Appel<'_>,
    infixe: &str,
    variables: &Variables,
) -> Resultat<Vec<Jeton>> {
    let numerique = infix_numerique(appel, infixe, variables)?;
    let rpn = to_rpn(&numerique)?;

    log::trace!(
        "[{}] '{infixe}' -> '{numerique}' -> {}",
        appel.profondeur(),
        format_tokens(&rpn)
    );
    Ok(rpn)
}

/// Pipeline complet : infixe -> valeur.
pub(crate) fn solve_infix(
    appel: &Appel<'_>,
    infixe: &str,
    variables: &Variables,
) -> Resultat<f64> {
    let rpn = postfix_of(appel, infixe, variables)?;
    solve_postfix(&rpn)
}
