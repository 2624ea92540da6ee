// src/noyau/trig.rs
//
// Trig numérique (f64) pour sin/cos/tan et leurs inverses sec/csc/cot
// -------------------------------------------------------------------
// - Unité d’angle portée par le contexte (radians par défaut)
// - sec/csc/cot = 1/cos, 1/sin, 1/tan : base exactement nulle => division par zéro

use num_traits::Zero;

use super::erreur::{EvalError, Resultat};

/// Unité des arguments trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Angle {
    #[default]
    Radians,
    Degres,
}

impl Angle {
    /// Convertit un argument exprimé dans cette unité en radians.
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            Angle::Radians => x,
            Angle::Degres => x.to_radians(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
}

impl TrigFn {
    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
            TrigFn::Sec => "sec",
            TrigFn::Csc => "csc",
            TrigFn::Cot => "cot",
        }
    }

    pub fn appliquer(self, x: f64, angle: Angle) -> Resultat<f64> {
        let r = angle.en_radians(x);
        match self {
            TrigFn::Sin => Ok(r.sin()),
            TrigFn::Cos => Ok(r.cos()),
            TrigFn::Tan => Ok(r.tan()),
            TrigFn::Sec => inverse(self, x, TrigFn::Cos, r.cos()),
            TrigFn::Csc => inverse(self, x, TrigFn::Sin, r.sin()),
            TrigFn::Cot => inverse(self, x, TrigFn::Tan, r.tan()),
        }
    }
}

fn inverse(f: TrigFn, x: f64, base: TrigFn, valeur: f64) -> Resultat<f64> {
    if valeur.is_zero() {
        return Err(EvalError::division_par_zero(format!(
            "{}({x}) = 1/{}({x})",
            f.nom(),
            base.nom()
        )));
    }
    Ok(1.0 / valeur)
}
