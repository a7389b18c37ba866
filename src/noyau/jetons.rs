// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Signes unaires : jamais produits par tokenize(), seulement par to_rpn()
    // (un '-' ou '+' en position d’opérande).
    Neg,
    Pos,
}

/// Tokenize une chaîne (déjà filtrée) en jetons.
/// Supporte:
/// - entiers (ex: 12, 0, 00) ; "012" refusé (zéro non significatif)
/// - décimaux (ex: 1.5, 1., .5, 00.5) -> Flottant
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces : séparateurs seulement, tout blanc Unicode compris
///   ("1\n+1", "1\u{a0}+1" => 2). Volontairement plus souple que l’hôte
///   d’origine, qui refuse ces blancs au milieu d’une expression.
pub fn tokenize(s: &str) -> ResultatCalcul<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(tok);
            i += 1;
            continue;
        }

        // Nombre : suite maximale de [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&lit)?));
            continue;
        }

        return Err(ErreurCalcul::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Littéral -> Nombre. `lit` ne contient que des chiffres et des points.
fn lire_nombre(lit: &str) -> ResultatCalcul<Nombre> {
    let points = lit.matches('.').count();
    if points > 1 {
        return Err(ErreurCalcul::syntaxe(format!("nombre invalide: {lit}")));
    }
    if !lit.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ErreurCalcul::syntaxe("point isolé"));
    }

    if points == 1 {
        let x: f64 = lit
            .parse()
            .map_err(|_| ErreurCalcul::syntaxe(format!("nombre invalide: {lit}")))?;
        if !x.is_finite() {
            return Err(ErreurCalcul::Debordement);
        }
        return Ok(Nombre::Flottant(x));
    }

    // "0", "00" OK ; "012" refusé (pas de zéro non significatif sur un entier)
    if lit.len() > 1 && lit.starts_with('0') && lit.bytes().any(|b| b != b'0') {
        return Err(ErreurCalcul::syntaxe(format!(
            "zéro non significatif interdit: {lit}"
        )));
    }

    let n = BigInt::parse_bytes(lit.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::syntaxe(format!("nombre invalide: {lit}")))?;
    Ok(Nombre::Entier(n))
}

/// Format utilitaire (logs debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(Nombre::Entier(n)) => n.to_string(),
            Tok::Num(Nombre::Flottant(x)) => format!("{x:?}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
