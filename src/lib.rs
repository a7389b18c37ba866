//! Calculatrice web
//!
//! - `noyau`   : évaluation d’expressions arithmétiques (liste blanche, shunting-yard, arbre)
//! - `serveur` : page du pavé + `POST /calculate` (axum)
//! - `app`     : logique du pavé, et sa vue egui native (feature `bureau`)

pub mod app;
pub mod noyau;
pub mod serveur;

pub use noyau::{evaluate, EvaluationResult};
