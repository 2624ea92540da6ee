// src/noyau/fonctions.rs
//
// Fonctions intégrées (un seul argument entre parenthèses).
// Dispatch par enum : la liste est fermée, le match est exhaustif.

use super::erreur::{EvalError, Resultat};
use super::trig::{Angle, TrigFn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Trig(TrigFn),
    Abs,
    Ln,
    Sqrt,
}

impl Fonction {
    pub const TOUTES: [Fonction; 9] = [
        Fonction::Trig(TrigFn::Sin),
        Fonction::Trig(TrigFn::Cos),
        Fonction::Trig(TrigFn::Tan),
        Fonction::Trig(TrigFn::Csc),
        Fonction::Trig(TrigFn::Sec),
        Fonction::Trig(TrigFn::Cot),
        Fonction::Abs,
        Fonction::Ln,
        Fonction::Sqrt,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Trig(t) => t.nom(),
            Fonction::Abs => "abs",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Recherche exacte (sensible à la casse).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn appliquer(self, x: f64, angle: Angle) -> Resultat<f64> {
        match self {
            Fonction::Trig(t) => t.appliquer(x, angle),
            Fonction::Abs => Ok(x.abs()),
            Fonction::Ln => {
                let r = x.ln();
                if !r.is_finite() {
                    return Err(EvalError::domaine(format!("ln({x}) = {r}")));
                }
                Ok(r)
            }
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(EvalError::domaine(format!(
                        "sqrt({x}) : racine d’un nombre négatif"
                    )));
                }
                Ok(x.sqrt())
            }
        }
    }
}
