//! Corps JSON échangés avec la page : `{"expression": ...}` -> `{"result": ...}`

use serde::{Deserialize, Serialize};

use crate::noyau::{EvaluationResult, MARQUEUR_ERREUR};

#[derive(Debug, Clone, Deserialize)]
pub struct RequeteCalcul {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReponseCalcul {
    pub result: String,
}

impl ReponseCalcul {
    pub fn erreur() -> Self {
        Self {
            result: MARQUEUR_ERREUR.to_string(),
        }
    }
}

impl From<&EvaluationResult> for ReponseCalcul {
    fn from(r: &EvaluationResult) -> Self {
        Self {
            result: r.as_text().to_string(),
        }
    }
}
