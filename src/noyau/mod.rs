//! Noyau arithmétique
//!
//! Organisation interne :
//! - filtre.rs  : liste blanche de caractères (garde anti-injection)
//! - jetons.rs  : tokenisation (littéraux entiers / décimaux, opérateurs)
//! - rpn.rs     : shunting-yard + construction Expr
//! - expr.rs    : arbre + évaluation
//! - nombre.rs  : entiers exacts / flottants, division plancher
//! - format.rs  : rendu texte du résultat
//! - erreur.rs  : causes d’échec internes
//! - eval.rs    : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod filtre;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluate_with, evaluer, EvaluationResult, Limites, MARQUEUR_ERREUR};
