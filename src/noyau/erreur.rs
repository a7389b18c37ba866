// src/noyau/erreur.rs
//
// Causes d’échec internes du noyau.
// Vers l’extérieur tout se replie en `EvaluationResult::Failure` : ces variantes
// servent seulement aux logs (debug) et aux tests.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    Vide,

    #[error("entrée trop longue ({longueur} > {max} caractères)")]
    TropLong { longueur: usize, max: usize },

    #[error("caractère interdit {caractere:?} en position {position}")]
    CaractereInterdit { caractere: char, position: usize },

    #[error("syntaxe: {0}")]
    Syntaxe(String),

    #[error("imbrication trop profonde")]
    TropProfond,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("débordement flottant")]
    Debordement,

    #[error("résultat trop grand ({chiffres} chiffres)")]
    ResultatTropGrand { chiffres: usize },
}

impl ErreurCalcul {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalcul::Syntaxe(msg.into())
    }
}

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;
