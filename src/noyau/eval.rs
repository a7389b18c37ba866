//! Noyau — évaluation (pipeline réel)
//!
//! trim -> liste blanche -> jetons -> RPN -> Expr -> évaluation -> rendu texte
//!
//! Aucune évaluation “dynamique” : l’arbre est construit puis parcouru ici,
//! la liste blanche n’est qu’un premier tri bon marché.

use tracing::{debug, trace};

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::filtre::valider_caracteres;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Marqueur renvoyé à l’appelant quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Résultat opaque d’une évaluation : la cause d’un échec n’est jamais exposée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationResult {
    Success(String),
    Failure,
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResult::Success(_))
    }

    /// Texte pour l’affichage / le JSON : la valeur, ou "Error".
    pub fn as_text(&self) -> &str {
        match self {
            EvaluationResult::Success(v) => v,
            EvaluationResult::Failure => MARQUEUR_ERREUR,
        }
    }
}

/// Garde-fous du noyau (anti-abus / anti-gel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    /// Longueur max de l’entrée (en caractères, après trim).
    pub longueur_max: usize,
    /// Imbrication max des parenthèses.
    pub profondeur_parentheses_max: usize,
    /// Nombre max de chiffres d’un résultat entier.
    pub chiffres_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            longueur_max: 10_000,
            profondeur_parentheses_max: 200,
            chiffres_max: 4_300,
        }
    }
}

/// API publique : évalue une expression avec les limites par défaut.
pub fn evaluate(text: &str) -> EvaluationResult {
    evaluate_with(text, &Limites::default())
}

/// Comme `evaluate`, limites explicites. Toute erreur devient `Failure`
/// (la cause part seulement dans les logs, niveau debug).
pub fn evaluate_with(text: &str, limites: &Limites) -> EvaluationResult {
    match evaluer(text, limites) {
        Ok(v) => EvaluationResult::Success(v),
        Err(e) => {
            debug!(erreur = %e, "évaluation refusée");
            EvaluationResult::Failure
        }
    }
}

/// Pipeline complet avec la cause d’échec détaillée (tests, CLI).
pub fn evaluer(text: &str, limites: &Limites) -> ResultatCalcul<String> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::Vide);
    }

    let longueur = s.chars().count();
    if longueur > limites.longueur_max {
        return Err(ErreurCalcul::TropLong {
            longueur,
            max: limites.longueur_max,
        });
    }

    // 1) Liste blanche, avant tout le reste
    valider_caracteres(s)?;

    // 2) Jetons
    let jetons = tokenize(s)?;
    trace!(jetons = %format_tokens(&jetons));

    // 3) RPN (valide aussi la syntaxe)
    let rpn = to_rpn(&jetons, limites.profondeur_parentheses_max)?;
    trace!(rpn = %format_tokens(&rpn));

    // 4) Arbre
    let expr = from_rpn(&rpn)?;
    trace!(arbre = %expr);

    // 5) Valeur puis rendu
    let valeur = expr.eval()?;
    format_resultat(&valeur, limites.chiffres_max)
}
