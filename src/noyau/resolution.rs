// src/noyau/resolution.rs
//
// Résolution : texte infixe avec noms -> texte infixe purement numérique.
//
// Un seul parcours gauche -> droite (pas de re-scan du texte) :
// 1. notation scientifique : "2e-9" -> "2*10^-9"
// 2. mot suivi de '(' dont un suffixe est une fonction étendue : arguments pré-résolus
//    (fonctions étendues imbriquées seulement), puis résolveur -> "(valeur)"
// 3. idem pour une fonction intégrée : argument évalué comme sous-expression complète
// 4. tout autre mot : constante (pi, e), variable, scalaire de repli, sinon erreur.
//    '*' implicite inséré des deux côtés si la simple concaténation serait ambiguë.
//
// Les parenthèses d’un appel sont appariées par comptage de profondeur :
// un appel mal fermé est une erreur de structure, jamais une boucle.

use super::contexte::Appel;
use super::erreur::{EvalError, Resultat};
use super::extensions::Resolveur;
use super::fonctions::Fonction;
use super::variables::{constante, Variables};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Portee {
    Complete,
    // arguments d’une fonction étendue : seuls ses appels imbriqués sont résolus
    ExtensionsSeules,
}

enum Appelable {
    Extension(String, Resolveur),
    Integree(Fonction),
}

/// Résout fonctions, notation scientifique et variables d’un texte sans espaces.
pub(crate) fn resoudre(appel: &Appel<'_>, texte: &str, variables: &Variables) -> Resultat<String> {
    let texte = notation_scientifique(&sans_sigles(texte));
    Resolution {
        appel: *appel,
        variables,
        portee: Portee::Complete,
    }
    .parcourir(&texte)
}

/// Découpe les arguments d’une fonction étendue sur les virgules de premier niveau.
///
/// "sum(x,1,2)*x,1,2" -> ["sum(x,1,2)*x", "1", "2"]
pub fn separer_arguments(texte: &str) -> Vec<&str> {
    let mut parties = Vec::new();
    let mut profondeur = 0i32;
    let mut debut = 0;

    for (i, c) in texte.char_indices() {
        match c {
            '(' | '[' => profondeur += 1,
            ')' | ']' => profondeur -= 1,
            ',' if profondeur == 0 => {
                parties.push(&texte[debut..i]);
                debut = i + 1;
            }
            _ => {}
        }
    }
    parties.push(&texte[debut..]);
    parties
}

/// "$x" / "&x" : anciens sigles de variables, ignorés.
fn sans_sigles(texte: &str) -> String {
    texte.chars().filter(|c| !matches!(c, '$' | '&')).collect()
}

/// <chiffre>e<signe?><chiffre> -> <chiffre>*10^<signe><chiffre>
fn notation_scientifique(texte: &str) -> String {
    let chars: Vec<char> = texte.chars().collect();
    let mut sortie = String::with_capacity(texte.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if matches!(c, 'e' | 'E') && i > 0 && chars[i - 1].is_ascii_digit() {
            let signe = chars.get(i + 1).copied().filter(|s| matches!(s, '+' | '-'));
            let decalage = 1 + usize::from(signe.is_some());

            if chars.get(i + decalage).is_some_and(|d| d.is_ascii_digit()) {
                sortie.push_str("*10^");
                if signe == Some('-') {
                    sortie.push('-');
                }
                i += decalage;
                continue;
            }
        }

        sortie.push(c);
        i += 1;
    }

    sortie
}

/// Index de la ')' qui ferme la '(' en `ouvrante`.
fn fermeture(chars: &[char], ouvrante: usize) -> Option<usize> {
    let mut profondeur = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(ouvrante) {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn termine_valeur(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ')' | ']' | '!')
}

fn commence_valeur(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | '[')
}

/// Valeur -> texte décimal (jamais d’exposant). Refuse NaN et ±inf.
fn valeur_texte(v: f64, origine: &str) -> Resultat<String> {
    if !v.is_finite() {
        return Err(EvalError::domaine(format!("{origine} = {v}")));
    }
    Ok(v.to_string())
}

struct Resolution<'a, 'v> {
    appel: Appel<'a>,
    variables: &'v Variables,
    portee: Portee,
}

impl Resolution<'_, '_> {
    fn parcourir(&self, texte: &str) -> Resultat<String> {
        let chars: Vec<char> = texte.chars().collect();
        let mut sortie = String::with_capacity(texte.len());
        let mut i = 0;

        while i < chars.len() {
            if !chars[i].is_alphabetic() {
                sortie.push(chars[i]);
                i += 1;
                continue;
            }

            let debut = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let mot = &chars[debut..i];

            if chars.get(i) == Some(&'(') {
                if let Some((coupure, appelable)) = self.fonction_en_suffixe(mot) {
                    let nom: String = mot[coupure..].iter().collect();
                    let fin = fermeture(&chars, i).ok_or_else(|| {
                        EvalError::mal_formee(format!("'{nom}(' sans ')' correspondante"))
                    })?;
                    let args: String = chars[i + 1..fin].iter().collect();

                    // "xsin(..)" : x * sin(..)
                    if coupure > 0 {
                        let prefixe: String = mot[..coupure].iter().collect();
                        self.mot_libre(&prefixe, Some('('), &mut sortie)?;
                    }

                    let valeur = self.evaluer(&appelable, &args)?;
                    sortie.push('(');
                    sortie.push_str(&valeur_texte(valeur, &format!("{nom}({args})"))?);
                    sortie.push(')');

                    i = fin + 1;
                    continue;
                }
            }

            let mot: String = mot.iter().collect();
            self.mot_libre(&mot, chars.get(i).copied(), &mut sortie)?;
        }

        Ok(sortie)
    }

    /// Plus long suffixe du mot qui nomme une fonction (étendue d’abord).
    fn fonction_en_suffixe(&self, mot: &[char]) -> Option<(usize, Appelable)> {
        let extensions = self.appel.contexte().extensions();

        for coupure in 0..mot.len() {
            let nom: String = mot[coupure..].iter().collect();

            if let Some(r) = extensions.get(&nom) {
                return Some((coupure, Appelable::Extension(nom, r.clone())));
            }
            if self.portee == Portee::Complete {
                if let Some(f) = Fonction::depuis_nom(&nom) {
                    return Some((coupure, Appelable::Integree(f)));
                }
            }
        }
        None
    }

    fn evaluer(&self, appelable: &Appelable, args: &str) -> Resultat<f64> {
        match appelable {
            Appelable::Extension(nom, resolveur) => {
                let args = if args.contains('(') {
                    Resolution {
                        appel: self.appel.enfant()?,
                        variables: self.variables,
                        portee: Portee::ExtensionsSeules,
                    }
                    .parcourir(args)?
                } else {
                    args.to_string()
                };

                let v = resolveur(&args, self.variables, &self.appel)?;
                log::debug!("[{}] {nom}({args}) = {v}", self.appel.profondeur());
                Ok(v)
            }

            Appelable::Integree(f) => {
                let x = self.appel.solve(args, self.variables)?;
                f.appliquer(x, self.appel.contexte().angle())
            }
        }
    }

    /// Mot qui n’est pas un appel de fonction.
    fn mot_libre(&self, mot: &str, suivant: Option<char>, sortie: &mut String) -> Resultat<()> {
        if self.portee == Portee::ExtensionsSeules {
            sortie.push_str(mot);
            return Ok(());
        }

        let valeur = constante(mot)
            .or_else(|| self.variables.valeur(mot))
            .ok_or_else(|| EvalError::variable(mot))?;
        let texte = valeur_texte(valeur, mot)?;

        if sortie.chars().last().is_some_and(termine_valeur) {
            sortie.push('*');
        }
        sortie.push_str(&texte);
        if suivant.is_some_and(commence_valeur) {
            sortie.push('*');
        }
        Ok(())
    }
}
