// src/noyau/pile.rs
//
// Pile LIFO minimale (shunting-yard + évaluation postfixe).
// Pas de borne autre que la mémoire; chaque évaluation possède sa propre pile.

#[derive(Clone, Debug, PartialEq)]
pub struct Pile<T> {
    elements: Vec<T>,
}

// sans borne T: Default (piles de jetons)
impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, valeur: T) {
        self.elements.push(valeur);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Sommet de la pile, sans le retirer.
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Clone> Pile<T> {
    /// Contenu dans l’ordre d’insertion (diagnostic/tests).
    /// None si la pile est vide.
    pub fn to_vec(&self) -> Option<Vec<T>> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.clone())
        }
    }
}
