// src/noyau/extensions.rs
//
// Registre des fonctions étendues : nom -> résolveur.
// Consulté avant les fonctions intégrées. Ajout seulement, le dernier enregistré gagne.
// Rempli à la construction du Contexte, en lecture seule ensuite (partage sans verrou).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::contexte::Appel;
use super::erreur::Resultat;
use super::variables::Variables;

/// Résolveur d’une fonction étendue :
/// (texte brut des arguments, variables, appel en cours) -> valeur.
///
/// L’appel en cours permet de réévaluer un sous-texte (`Appel::solve`) avec le même
/// contexte, en comptant la profondeur.
pub type Resolveur = Arc<dyn Fn(&str, &Variables, &Appel<'_>) -> Resultat<f64> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Extensions {
    table: HashMap<String, Resolveur>,
}

impl Extensions {
    /// Registre vide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registre avec `sum` et `log`.
    pub fn avec_integrees() -> Self {
        let mut ext = Self::new();
        super::avancees::enregistrer(&mut ext);
        ext
    }

    /// Enregistre (ou remplace) une fonction.
    /// Le nom doit être fait de lettres, sinon il ne sera jamais reconnu dans une expression.
    pub fn register<F>(&mut self, nom: impl Into<String>, resolveur: F)
    where
        F: Fn(&str, &Variables, &Appel<'_>) -> Resultat<f64> + Send + Sync + 'static,
    {
        self.inserer(nom.into(), Arc::new(resolveur));
    }

    /// Enregistre toute une famille de fonctions d’un coup.
    pub fn etendre<I, K>(&mut self, famille: I)
    where
        I: IntoIterator<Item = (K, Resolveur)>,
        K: Into<String>,
    {
        for (nom, resolveur) in famille {
            self.inserer(nom.into(), resolveur);
        }
    }

    fn inserer(&mut self, nom: String, resolveur: Resolveur) {
        if nom.is_empty() || !nom.chars().all(char::is_alphabetic) {
            log::warn!("extension '{nom}' : nom non alphabétique, jamais reconnue");
        }
        if self.table.insert(nom.clone(), resolveur).is_some() {
            log::debug!("extension '{nom}' remplacée");
        }
    }

    pub fn get(&self, nom: &str) -> Option<&Resolveur> {
        self.table.get(nom)
    }

    pub fn contient(&self, nom: &str) -> bool {
        self.table.contains_key(nom)
    }

    /// Noms enregistrés, triés.
    pub fn noms(&self) -> Vec<&str> {
        let mut noms: Vec<&str> = self.table.keys().map(String::as_str).collect();
        noms.sort_unstable();
        noms
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.noms()).finish()
    }
}
