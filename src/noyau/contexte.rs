// src/noyau/contexte.rs
//
// Contexte d’évaluation explicite (remplace tout état global) :
// - registre des fonctions étendues
// - unité d’angle
// - garde-fous : profondeur d’imbrication, nombre de termes d’une somme
//
// Construit une fois par l’appelant, puis partagé en lecture seule.

use super::calcul;
use super::erreur::{EvalError, Resultat};
use super::eval;
use super::extensions::Extensions;
use super::jetons::{format_tokens, Jeton};
use super::trig::Angle;
use super::variables::Variables;

/// Profondeur d’imbrication par défaut (fonctions dans fonctions).
pub const PROFONDEUR_MAX_DEFAUT: usize = 64;

/// Nombre maximal de termes qu’une somme peut parcourir.
pub const ITERATIONS_MAX_DEFAUT: u64 = 100_000;

#[derive(Clone, Debug)]
pub struct Contexte {
    extensions: Extensions,
    angle: Angle,
    profondeur_max: usize,
    iterations_max: u64,
}

impl Default for Contexte {
    fn default() -> Self {
        Self::new()
    }
}

impl Contexte {
    /// Réglages par défaut + extensions intégrées (sum, log).
    pub fn new() -> Self {
        Self {
            extensions: Extensions::avec_integrees(),
            ..Self::vide()
        }
    }

    /// Réglages par défaut, sans aucune extension.
    pub fn vide() -> Self {
        Self {
            extensions: Extensions::new(),
            angle: Angle::default(),
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
            iterations_max: ITERATIONS_MAX_DEFAUT,
        }
    }

    pub fn avec_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    pub fn avec_profondeur_max(mut self, profondeur_max: usize) -> Self {
        self.profondeur_max = profondeur_max;
        self
    }

    pub fn avec_iterations_max(mut self, iterations_max: u64) -> Self {
        self.iterations_max = iterations_max;
        self
    }

    pub fn avec_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn profondeur_max(&self) -> usize {
        self.profondeur_max
    }

    pub fn iterations_max(&self) -> u64 {
        self.iterations_max
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Ajoute une fonction étendue (le dernier enregistré gagne).
    pub fn register_extension<F>(&mut self, nom: impl Into<String>, resolveur: F)
    where
        F: Fn(&str, &Variables, &Appel<'_>) -> Resultat<f64> + Send + Sync + 'static,
    {
        self.extensions.register(nom, resolveur);
    }

    /// Évalue une expression infixe avec ses variables.
    pub fn solve(&self, expression: &str, variables: impl Into<Variables>) -> Resultat<f64> {
        let variables = variables.into();
        let appel = Appel::racine(self, expression);

        let r = eval::solve_infix(&appel, expression, &variables)
            .map_err(|e| e.avec_expression(expression));

        match &r {
            Ok(v) => log::debug!("solve('{expression}') = {v}"),
            Err(e) => log::debug!("solve('{expression}') : {e}"),
        }
        r
    }

    /// Évalue une RPN déjà construite (par ex. mise en cache).
    pub fn solve_postfix(&self, rpn: &[Jeton]) -> Resultat<f64> {
        calcul::solve_postfix(rpn).map_err(|e| e.avec_expression(&format_tokens(rpn)))
    }

    /// Résout fonctions et variables puis convertit en RPN, sans évaluer.
    pub fn to_postfix(&self, expression: &str, variables: impl Into<Variables>) -> Resultat<Vec<Jeton>> {
        let variables = variables.into();
        let appel = Appel::racine(self, expression);
        eval::postfix_of(&appel, expression, &variables).map_err(|e| e.avec_expression(expression))
    }
}

/// Évaluation en cours : contexte, expression de plus haut niveau (messages d’erreur)
/// et profondeur d’imbrication courante.
///
/// Passé aux résolveurs des fonctions étendues pour qu’ils puissent réévaluer
/// leurs arguments.
#[derive(Clone, Copy, Debug)]
pub struct Appel<'a> {
    contexte: &'a Contexte,
    expression: &'a str,
    profondeur: usize,
}

impl<'a> Appel<'a> {
    pub(crate) fn racine(contexte: &'a Contexte, expression: &'a str) -> Self {
        Self {
            contexte,
            expression,
            profondeur: 0,
        }
    }

    pub fn contexte(&self) -> &'a Contexte {
        self.contexte
    }

    /// Expression passée à `solve` par l’appelant d’origine.
    pub fn expression(&self) -> &'a str {
        self.expression
    }

    pub fn profondeur(&self) -> usize {
        self.profondeur
    }

    /// Niveau d’imbrication suivant, ou ResourceExhaustion si la limite est atteinte.
    pub(crate) fn enfant(&self) -> Resultat<Appel<'a>> {
        let profondeur = self.profondeur + 1;
        if profondeur > self.contexte.profondeur_max {
            return Err(EvalError::ressources(self.contexte.profondeur_max as u64)
                .avec_expression(self.expression));
        }
        Ok(Appel { profondeur, ..*self })
    }

    /// Évalue un sous-texte infixe complet (fonctions, variables, opérateurs)
    /// un niveau plus bas.
    pub fn solve(&self, sous_expression: &str, variables: &Variables) -> Resultat<f64> {
        let enfant = self.enfant()?;
        eval::solve_infix(&enfant, sous_expression, variables)
            .map_err(|e| e.avec_expression(self.expression))
    }
}
