// src/noyau/erreur.rs
//
// Taxonomie d’erreurs : toutes terminales, remontées telles quelles à l’appelant.
// Chaque erreur embarque l’expression de plus haut niveau (diagnostic).
// Les étages bas niveau la laissent vide; le pipeline la renseigne une seule fois.

use thiserror::Error;

/// Résultat de toutes les opérations du noyau.
pub type Resultat<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Entrée vide, groupes non appariés, jeton inattendu.
    #[error("expression mal formée ({raison}) dans '{expression}'")]
    MalformedExpression { raison: String, expression: String },

    /// Identifiant libre sans valeur ni scalaire de repli.
    #[error("aucune valeur pour la variable '{nom}' dans '{expression}'")]
    UndefinedVariable { nom: String, expression: String },

    /// `/`, `%`, sec/csc/cot avec un diviseur nul.
    #[error("division par zéro : '{operation}' dans '{expression}'")]
    DivisionByZero { operation: String, expression: String },

    /// Résultat non réel ou non fini (ln, log, sqrt, factorielle négative).
    #[error("hors domaine : '{operation}' dans '{expression}'")]
    DomainError { operation: String, expression: String },

    /// Profondeur d’imbrication (ou nombre d’itérations) dépassée.
    #[error("limite de ressources ({limite}) dépassée dans '{expression}'")]
    ResourceExhaustion { limite: u64, expression: String },
}

impl EvalError {
    pub(crate) fn mal_formee(raison: impl Into<String>) -> Self {
        EvalError::MalformedExpression {
            raison: raison.into(),
            expression: String::new(),
        }
    }

    pub(crate) fn variable(nom: impl Into<String>) -> Self {
        EvalError::UndefinedVariable {
            nom: nom.into(),
            expression: String::new(),
        }
    }

    pub(crate) fn division_par_zero(operation: impl Into<String>) -> Self {
        EvalError::DivisionByZero {
            operation: operation.into(),
            expression: String::new(),
        }
    }

    pub(crate) fn domaine(operation: impl Into<String>) -> Self {
        EvalError::DomainError {
            operation: operation.into(),
            expression: String::new(),
        }
    }

    pub(crate) fn ressources(limite: u64) -> Self {
        EvalError::ResourceExhaustion {
            limite,
            expression: String::new(),
        }
    }

    /// Expression embarquée (peut être vide si l’erreur n’a pas traversé le pipeline).
    pub fn expression(&self) -> &str {
        match self {
            EvalError::MalformedExpression { expression, .. }
            | EvalError::UndefinedVariable { expression, .. }
            | EvalError::DivisionByZero { expression, .. }
            | EvalError::DomainError { expression, .. }
            | EvalError::ResourceExhaustion { expression, .. } => expression,
        }
    }

    /// Renseigne l’expression si elle ne l’est pas déjà (la plus profonde ne gagne pas).
    pub fn avec_expression(mut self, texte: &str) -> Self {
        let slot = match &mut self {
            EvalError::MalformedExpression { expression, .. }
            | EvalError::UndefinedVariable { expression, .. }
            | EvalError::DivisionByZero { expression, .. }
            | EvalError::DomainError { expression, .. }
            | EvalError::ResourceExhaustion { expression, .. } => expression,
        };
        if slot.is_empty() {
            *slot = texte.to_string();
        }
        self
    }

    /// Codes numériques historiques (5500..5505).
    pub fn code(&self) -> u32 {
        match self {
            EvalError::MalformedExpression { raison, .. } if raison == RAISON_VIDE => 5502,
            EvalError::MalformedExpression { .. } => 5500,
            EvalError::DivisionByZero { .. } => 5501,
            EvalError::UndefinedVariable { .. } => 5503,
            EvalError::DomainError { .. } => 5504,
            EvalError::ResourceExhaustion { .. } => 5505,
        }
    }
}

/// Raison utilisée pour une entrée vide (code 5502).
pub(crate) const RAISON_VIDE: &str = "aucune expression";
