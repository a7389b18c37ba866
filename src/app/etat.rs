//! src/app/etat.rs
//!
//! État du pavé (sans vue).
//!
//! Rôle : contenir l’affichage de la calculatrice et offrir les actions du pavé
//! (chiffre/opérateur, AC, DEL, =), avec le même comportement que la page web.
//!
//! Contrats :
//! - Actions déterministes ; le temps est passé en paramètre (secondes, horloge de la vue).
//! - Après un échec, l’affichage montre "Error" puis s’efface 1,5 s plus tard.

use crate::noyau::{evaluate_with, EvaluationResult, Limites, MARQUEUR_ERREUR};

/// Délai avant effacement automatique du marqueur d’erreur (secondes).
pub const DELAI_EFFACEMENT_ERREUR: f64 = 1.5;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- affichage (entrée et résultat partagent la même ligne) ---
    pub affichage: String,

    // Instant (secondes) où effacer "Error" ; None si rien de prévu.
    pub effacement_a: Option<f64>,

    // --- paramètres ---
    pub limites: Limites,
}

impl AppCalc {
    pub fn new(limites: Limites) -> Self {
        Self {
            limites,
            ..Self::default()
        }
    }

    pub fn affiche_erreur(&self) -> bool {
        self.affichage == MARQUEUR_ERREUR
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre / point / opérateur / parenthèse.
    /// Si "Error" est affiché, on repart d’un affichage vide.
    pub fn append_char(&mut self, c: char) {
        if self.affiche_erreur() {
            self.affichage.clear();
        }
        self.effacement_a = None;
        self.affichage.push(c);
    }

    /// AC : remise à zéro.
    pub fn clear_display(&mut self) {
        self.affichage.clear();
        self.effacement_a = None;
    }

    /// DEL : retire le dernier caractère.
    pub fn delete_char(&mut self) {
        self.affichage.pop();
        self.effacement_a = None;
    }

    /// `=` : évalue l’affichage courant. Vide => rien.
    pub fn calculer(&mut self, maintenant: f64) {
        if self.affichage.is_empty() || self.affiche_erreur() {
            return;
        }

        match evaluate_with(&self.affichage, &self.limites) {
            EvaluationResult::Success(v) => {
                self.affichage = v;
                self.effacement_a = None;
            }
            EvaluationResult::Failure => {
                self.affichage = MARQUEUR_ERREUR.to_string();
                self.effacement_a = Some(maintenant + DELAI_EFFACEMENT_ERREUR);
            }
        }
    }

    /// À appeler à chaque image : efface "Error" quand le délai est écoulé.
    pub fn tick(&mut self, maintenant: f64) {
        if let Some(t) = self.effacement_a {
            if maintenant >= t {
                self.clear_display();
            }
        }
    }
}
