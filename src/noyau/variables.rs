// src/noyau/variables.rs
//
// Contexte de variables : rien, un scalaire (appliqué à toute variable libre),
// ou une table nom -> valeur (noms sensibles à la casse, lettres seulement).
// Les constantes pi et e ne passent jamais par ce contexte.

use std::collections::HashMap;
use std::f64::consts::{E, PI};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Variables {
    #[default]
    Aucune,
    Scalaire(f64),
    Table(HashMap<String, f64>),
}

impl Variables {
    pub fn table<I, K>(paires: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Variables::Table(paires.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Valeur d’une variable libre :
    /// - table : recherche exacte
    /// - scalaire : toujours ce scalaire (0 compris)
    pub fn valeur(&self, nom: &str) -> Option<f64> {
        match self {
            Variables::Aucune => None,
            Variables::Scalaire(v) => Some(*v),
            Variables::Table(t) => t.get(nom).copied(),
        }
    }
}

/// pi et e (insensible à la casse), toujours disponibles.
pub fn constante(nom: &str) -> Option<f64> {
    if nom.eq_ignore_ascii_case("pi") {
        Some(PI)
    } else if nom.eq_ignore_ascii_case("e") {
        Some(E)
    } else {
        None
    }
}

impl From<f64> for Variables {
    fn from(v: f64) -> Self {
        Variables::Scalaire(v)
    }
}

impl From<Option<f64>> for Variables {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Variables::Aucune, Variables::Scalaire)
    }
}

impl From<HashMap<String, f64>> for Variables {
    fn from(t: HashMap<String, f64>) -> Self {
        Variables::Table(t)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Variables {
    fn from(paires: [(K, f64); N]) -> Self {
        Variables::table(paires)
    }
}
