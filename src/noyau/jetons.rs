// src/noyau/jetons.rs

use std::fmt;

/// Niveaux de précédence (ordre total, du plus faible au plus fort).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Niveau {
    Bas,    // + -
    Milieu, // / * %
    Haut,   // ^ !
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Puissance,   // ^
    Factorielle, // ! (seul opérateur unaire, postfixé)
    Division,
    Multiplication,
    Modulo,
    Addition,
    Soustraction,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        Some(match c {
            '^' => Operateur::Puissance,
            '!' => Operateur::Factorielle,
            '/' => Operateur::Division,
            '*' => Operateur::Multiplication,
            '%' => Operateur::Modulo,
            '+' => Operateur::Addition,
            '-' => Operateur::Soustraction,
            _ => return None,
        })
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Puissance => '^',
            Operateur::Factorielle => '!',
            Operateur::Division => '/',
            Operateur::Multiplication => '*',
            Operateur::Modulo => '%',
            Operateur::Addition => '+',
            Operateur::Soustraction => '-',
        }
    }

    pub fn niveau(self) -> Niveau {
        match self {
            Operateur::Puissance | Operateur::Factorielle => Niveau::Haut,
            Operateur::Division | Operateur::Multiplication | Operateur::Modulo => Niveau::Milieu,
            Operateur::Addition | Operateur::Soustraction => Niveau::Bas,
        }
    }

    pub fn est_unaire(self) -> bool {
        matches!(self, Operateur::Factorielle)
    }
}

/// Genre de groupe : ( ) ou [ ].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Groupe {
    Parenthese,
    Crochet,
}

impl Groupe {
    pub fn ouvrante(c: char) -> Option<Self> {
        match c {
            '(' => Some(Groupe::Parenthese),
            '[' => Some(Groupe::Crochet),
            _ => None,
        }
    }

    pub fn fermante(c: char) -> Option<Self> {
        match c {
            ')' => Some(Groupe::Parenthese),
            ']' => Some(Groupe::Crochet),
            _ => None,
        }
    }

    pub fn symboles(self) -> (char, char) {
        match self {
            Groupe::Parenthese => ('(', ')'),
            Groupe::Crochet => ('[', ']'),
        }
    }
}

/// Unité d’un flux infixe ou postfixe.
/// Les nombres restent en texte jusqu’à l’évaluation (accumulation caractère par caractère).
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(String),
    Operateur(Operateur),
    Ouvrante(Groupe),
    Fermante(Groupe),
}

impl Jeton {
    pub fn nombre(v: f64) -> Self {
        Jeton::Nombre(v.to_string())
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(t) => write!(f, "{t}"),
            Jeton::Operateur(op) => write!(f, "{}", op.symbole()),
            Jeton::Ouvrante(g) => write!(f, "{}", g.symboles().0),
            Jeton::Fermante(g) => write!(f, "{}", g.symboles().1),
        }
    }
}

/// Format utilitaire (debug/messages d’erreur) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
