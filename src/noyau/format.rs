// src/noyau/format.rs
//
// Rendu texte du résultat :
// - valeur entière (Entier, ou Flottant sans partie fractionnaire) => "3", "-4", "0"
// - sinon forme décimale la plus courte qui se relit à l’identique,
//   en notation scientifique sous 1e-4 ("1.5e-07"), comme l’hôte d’origine.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::nombre::Nombre;

/// Sous ce seuil (en valeur absolue), un flottant s’affiche en notation scientifique.
const SEUIL_SCIENTIFIQUE: f64 = 1e-4;

pub fn format_resultat(n: &Nombre, chiffres_max: usize) -> ResultatCalcul<String> {
    match n {
        Nombre::Entier(v) => format_entier(v, chiffres_max),
        Nombre::Flottant(x) if !x.is_finite() => Err(ErreurCalcul::Debordement),
        Nombre::Flottant(x) if x.fract() == 0.0 => {
            // conversion exacte (x est entier), -0.0 devient 0
            let v = BigInt::from_f64(*x).ok_or(ErreurCalcul::Debordement)?;
            format_entier(&v, chiffres_max)
        }
        Nombre::Flottant(x) => Ok(format_flottant(*x)),
    }
}

fn format_entier(v: &BigInt, chiffres_max: usize) -> ResultatCalcul<String> {
    let s = v.to_string();
    let chiffres = s.trim_start_matches('-').len();
    if chiffres > chiffres_max {
        return Err(ErreurCalcul::ResultatTropGrand { chiffres });
    }
    Ok(s)
}

fn format_flottant(x: f64) -> String {
    if x != 0.0 && x.abs() < SEUIL_SCIENTIFIQUE {
        return format_scientifique(x);
    }
    // Display de f64 : plus courte représentation relisible, sans exposant
    format!("{x}")
}

/// "1.5e-7" (Rust) -> "1.5e-07" (exposant signé, au moins 2 chiffres)
fn format_scientifique(x: f64) -> String {
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let signe = if e < 0 { '-' } else { '+' };
                format!("{mantisse}e{signe}{:02}", e.abs())
            }
            Err(_) => brut,
        },
        None => brut,
    }
}
