// src/noyau/rpn.rs
//
// Shunting-yard : texte infixe purement numérique -> RPN (postfixe)
//
// Règles (un caractère à la fois, en gardant le caractère précédent) :
// - chiffre / '.' : accumulé dans le nombre courant
// - '-' après rien, un opérateur ou une ouvrante : signe du nombre qui suit
//   (donc "-4!" = (-4)!, et "3-5" = 3 5 -)
// - ouvrante après une valeur (chiffre, fermante, '!') : '*' implicite
// - '^' et '!' partagent le niveau haut, sans associativité à droite :
//   "2^3^2" = (2^3)^2
// - tout opérateur dépile d’abord les opérateurs de niveau >= au sien
//   (sauf le '*' de "-(...)" : il ne porte que sur le groupe qui suit)

use super::erreur::{EvalError, Resultat, RAISON_VIDE};
use super::jetons::{Groupe, Jeton, Operateur};
use super::pile::Pile;

/// Pré-contrôle avant tout calcul : entrée non vide, ( ) et [ ] en nombre égal.
pub fn verifier_infixe(infixe: &str) -> Resultat<()> {
    if infixe.trim().is_empty() {
        return Err(EvalError::mal_formee(RAISON_VIDE));
    }

    let compte = |cible: char| infixe.chars().filter(|&c| c == cible).count();

    if compte('(') != compte(')') {
        return Err(EvalError::mal_formee("parenthèses non appariées"));
    }
    if compte('[') != compte(']') {
        return Err(EvalError::mal_formee("crochets non appariés"));
    }
    Ok(())
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Caractère qui termine une valeur (déclenche le '*' implicite).
fn termine_valeur(c: char) -> bool {
    est_chiffre(c) || matches!(c, ')' | ']' | '!')
}

/// '-' / '+' en position de signe (pas de valeur à gauche).
fn position_de_signe(dernier: Option<char>) -> bool {
    match dernier {
        None => true,
        Some(c) => matches!(c, '^' | '/' | '*' | '%' | '+' | '-' | '(' | '['),
    }
}

#[derive(Default)]
struct Conversion {
    sortie: Vec<Jeton>,
    ops: Pile<Jeton>,
    // nombre en cours d’accumulation ("-" seul = signe en attente)
    nombre: Option<String>,
}

impl Conversion {
    fn vider_nombre(&mut self) {
        if let Some(n) = self.nombre.take() {
            self.sortie.push(Jeton::Nombre(n));
        }
    }

    fn empiler_operateur(&mut self, op: Operateur) {
        loop {
            let haut = match self.ops.peek() {
                Some(Jeton::Operateur(h)) if h.niveau() >= op.niveau() => *h,
                _ => break,
            };
            self.ops.pop();
            self.sortie.push(Jeton::Operateur(haut));
        }
        self.ops.push(Jeton::Operateur(op));
    }

    fn fermer(&mut self, groupe: Groupe) -> Resultat<()> {
        loop {
            match self.ops.pop() {
                Some(Jeton::Ouvrante(o)) if o == groupe => return Ok(()),
                Some(Jeton::Ouvrante(o)) => {
                    return Err(EvalError::mal_formee(format!(
                        "'{}' fermé par '{}'",
                        o.symboles().0,
                        groupe.symboles().1
                    )))
                }
                Some(j) => self.sortie.push(j),
                None => {
                    return Err(EvalError::mal_formee(format!(
                        "'{}' sans ouvrante",
                        groupe.symboles().1
                    )))
                }
            }
        }
    }
}

/// Convertit un texte infixe (nombres, opérateurs, groupes) en RPN.
///
/// Exemple:
///   "2(3+4)" -> [2, 3, 4, +, *]
pub fn to_rpn(infixe: &str) -> Resultat<Vec<Jeton>> {
    verifier_infixe(infixe)?;

    let mut conv = Conversion::default();
    let mut dernier: Option<char> = None;

    for c in infixe.chars().filter(|c| !c.is_whitespace()) {
        if est_chiffre(c) {
            // ")3" ou "!3" : multiplication implicite
            if conv.nombre.is_none() && dernier.is_some_and(|d| matches!(d, ')' | ']' | '!')) {
                conv.empiler_operateur(Operateur::Multiplication);
            }
            conv.nombre.get_or_insert_with(String::new).push(c);
        } else if let Some(g) = Groupe::ouvrante(c) {
            if conv.nombre.as_deref() == Some("-") {
                // "-(...)" : le signe porte sur tout le groupe, jamais sur la gauche
                // ("2/-(4)" = 2 / (-1*4)) : '*' empilé sans dépiler
                conv.nombre = None;
                conv.sortie.push(Jeton::Nombre("-1".into()));
                conv.ops.push(Jeton::Operateur(Operateur::Multiplication));
            } else {
                conv.vider_nombre();
                if dernier.is_some_and(termine_valeur) {
                    conv.empiler_operateur(Operateur::Multiplication);
                }
            }
            conv.ops.push(Jeton::Ouvrante(g));
        } else if let Some(g) = Groupe::fermante(c) {
            conv.vider_nombre();
            conv.fermer(g)?;
        } else if let Some(op) = Operateur::depuis_char(c) {
            match op {
                Operateur::Soustraction if position_de_signe(dernier) => {
                    // "--5" : les signes s’annulent
                    conv.nombre = match conv.nombre.take() {
                        Some(_) => None,
                        None => Some("-".to_string()),
                    };
                }
                // '+' unaire : sans effet
                Operateur::Addition if position_de_signe(dernier) => {}
                _ => {
                    conv.vider_nombre();
                    conv.empiler_operateur(op);
                }
            }
        } else {
            return Err(EvalError::mal_formee(format!("caractère inattendu '{c}'")));
        }

        dernier = Some(c);
    }

    conv.vider_nombre();

    while let Some(j) = conv.ops.pop() {
        match j {
            Jeton::Ouvrante(g) => {
                return Err(EvalError::mal_formee(format!(
                    "'{}' non fermé",
                    g.symboles().0
                )))
            }
            autre => conv.sortie.push(autre),
        }
    }

    Ok(conv.sortie)
}
