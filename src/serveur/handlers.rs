use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::noyau::{evaluate_with, EvaluationResult};
use crate::serveur::config::ServerConfig;
use crate::serveur::erreur::{ServerError, ServerResult};
use crate::serveur::modeles::{ReponseCalcul, RequeteCalcul};

/// POST /calculate
pub async fn calculate_handler(
    State(config): State<ServerConfig>,
    requete: Result<Json<RequeteCalcul>, JsonRejection>,
) -> ServerResult<Json<ReponseCalcul>> {
    let Json(requete) = requete?;

    let resultat = evaluate_with(&requete.expression, &config.limites);
    match resultat {
        EvaluationResult::Success(_) => {
            debug!(result = resultat.as_text(), "calcul effectué");
            Ok(Json(ReponseCalcul::from(&resultat)))
        }
        EvaluationResult::Failure => Err(ServerError::ExpressionRefusee),
    }
}

pub async fn health_handler() -> Json<JsonValue> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
