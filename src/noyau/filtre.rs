// src/noyau/filtre.rs
//
// Liste blanche de caractères, appliquée AVANT toute tokenisation.
// Autorisé : 0-9 . + - * / ( ) et espaces (au sens Unicode, comme `\s`).

use super::erreur::{ErreurCalcul, ResultatCalcul};

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace()
}

/// Refuse la chaîne au premier caractère hors liste blanche.
/// `position` est l’index en caractères (pas en octets).
pub fn valider_caracteres(s: &str) -> ResultatCalcul<()> {
    match s.chars().enumerate().find(|&(_, c)| !est_autorise(c)) {
        Some((position, caractere)) => Err(ErreurCalcul::CaractereInterdit {
            caractere,
            position,
        }),
        None => Ok(()),
    }
}
