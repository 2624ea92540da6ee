//! Noyau d’évaluation sûre (f64)
//!
//! Organisation interne :
//! - pile.rs        : pile LIFO générique
//! - erreur.rs      : EvalError (5 familles) + expression d’origine
//! - jetons.rs      : opérateurs, niveaux de priorité, jetons RPN
//! - rpn.rs         : pré-contrôle + shunting-yard (infixe numérique -> RPN)
//! - calcul.rs      : évaluation RPN, factorielle, gamma
//! - trig.rs        : sin cos tan sec csc cot, radians/degrés
//! - fonctions.rs   : fonctions intégrées (trig, abs, ln, sqrt)
//! - variables.rs   : contexte de variables + constantes pi, e
//! - extensions.rs  : registre des fonctions étendues
//! - avancees.rs    : sum, log
//! - resolution.rs  : noms -> nombres (fonctions, variables, notation scientifique)
//! - contexte.rs    : Contexte (réglages) + Appel (évaluation en cours)
//! - eval.rs        : pipeline complet

pub mod avancees;
pub mod calcul;
pub mod contexte;
pub mod erreur;
pub mod eval;
pub mod extensions;
pub mod fonctions;
pub mod jetons;
pub mod pile;
pub mod resolution;
pub mod rpn;
pub mod trig;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;


pub use calcul::{factorielle, gamma};
pub use contexte::{Appel, Contexte, ITERATIONS_MAX_DEFAUT, PROFONDEUR_MAX_DEFAUT};
pub use erreur::{EvalError, Resultat};
pub use extensions::{Extensions, Resolveur};
pub use fonctions::Fonction;
pub use jetons::{format_tokens, Groupe, Jeton, Niveau, Operateur};
pub use pile::Pile;
pub use resolution::separer_arguments;
pub use trig::{Angle, TrigFn};
pub use variables::{constante, Variables};
