//! Erreurs du serveur HTTP
//!
//! Toutes se rendent de la même façon : `400 {"result": "Error"}`.
//! Le détail reste dans les logs.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::serveur::modeles::ReponseCalcul;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Corps absent, pas du JSON, mauvais Content-Type, champ manquant ou trop gros
    #[error("requête invalide: {0}")]
    RequeteInvalide(#[from] JsonRejection),

    /// Expression bien transportée mais refusée par le noyau
    #[error("expression refusée")]
    ExpressionRefusee,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::RequeteInvalide(rejet) => {
                warn!(statut = %rejet.status(), "{self}");
            }
            ServerError::ExpressionRefusee => debug!("{self}"),
        }

        (StatusCode::BAD_REQUEST, Json(ReponseCalcul::erreur())).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
