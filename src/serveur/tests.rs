#![cfg(test)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use super::{config::ServerConfig, create_app};

fn app() -> Router {
    create_app(ServerConfig::default())
}

async fn envoyer(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.expect("réponse");
    let statut = resp.status();
    let corps = to_bytes(resp.into_body(), usize::MAX).await.expect("corps");
    (statut, corps.to_vec())
}

async fn post_calculate(corps: &str, content_type: Option<&str>) -> (StatusCode, JsonValue) {
    let mut req = Request::builder().method(Method::POST).uri("/calculate");
    if let Some(ct) = content_type {
        req = req.header(header::CONTENT_TYPE, ct);
    }
    let req = req.body(Body::from(corps.to_string())).expect("requête");

    let (statut, octets) = envoyer(app(), req).await;
    let valeur = serde_json::from_slice(&octets).expect("réponse JSON");
    (statut, valeur)
}

async fn calculer(expression: &str) -> (StatusCode, JsonValue) {
    let corps = json!({ "expression": expression }).to_string();
    post_calculate(&corps, Some("application/json")).await
}

#[tokio::test]
async fn calcul_reussi() {
    assert_eq!(calculer("2+2").await, (StatusCode::OK, json!({ "result": "4" })));
    assert_eq!(calculer("7/2").await, (StatusCode::OK, json!({ "result": "3" })));
    assert_eq!(
        calculer(" (1+2)*3 ").await,
        (StatusCode::OK, json!({ "result": "9" }))
    );
    assert_eq!(calculer("1.5*3").await, (StatusCode::OK, json!({ "result": "4.5" })));
}

#[tokio::test]
async fn expression_refusee_en_400() {
    for expr in ["1/0", "2+*3", "import os", "  ", "__import__('os')"] {
        assert_eq!(
            calculer(expr).await,
            (StatusCode::BAD_REQUEST, json!({ "result": "Error" })),
            "expr={expr:?}"
        );
    }
}

#[tokio::test]
async fn requetes_mal_formees() {
    let erreur = (StatusCode::BAD_REQUEST, json!({ "result": "Error" }));

    // champ absent
    assert_eq!(post_calculate("{}", Some("application/json")).await, erreur);
    // mauvais type
    assert_eq!(
        post_calculate(r#"{"expression": 4}"#, Some("application/json")).await,
        erreur
    );
    // pas du JSON
    assert_eq!(post_calculate("2+2", Some("application/json")).await, erreur);
    // Content-Type absent
    assert_eq!(post_calculate(r#"{"expression": "2+2"}"#, None).await, erreur);
    // Content-Type non JSON
    assert_eq!(
        post_calculate(r#"{"expression": "2+2"}"#, Some("text/plain")).await,
        erreur
    );
    // JSON null
    assert_eq!(post_calculate("null", Some("application/json")).await, erreur);
}

#[tokio::test]
async fn corps_trop_gros() {
    let expr = "1+".repeat(10_000) + "1";
    let corps = json!({ "expression": expr }).to_string();
    assert!(corps.len() > ServerConfig::default().max_payload_size());

    assert_eq!(
        post_calculate(&corps, Some("application/json")).await,
        (StatusCode::BAD_REQUEST, json!({ "result": "Error" }))
    );
}

#[tokio::test]
async fn page_racine() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(ct.starts_with("text/html"), "content-type={ct}");

    let corps = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(corps.to_vec()).unwrap();
    assert!(html.contains("/calculate"));
    assert!(html.contains("id=\"display\""));
}

#[tokio::test]
async fn sonde_de_vie() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (statut, octets) = envoyer(app(), req).await;
    let v: JsonValue = serde_json::from_slice(&octets).unwrap();

    assert_eq!(statut, StatusCode::OK);
    assert_eq!(v["status"], "ok");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn routes_et_methodes() {
    let req = Request::builder().uri("/inconnu").body(Body::empty()).unwrap();
    assert_eq!(envoyer(app(), req).await.0, StatusCode::NOT_FOUND);

    let req = Request::builder().uri("/calculate").body(Body::empty()).unwrap();
    assert_eq!(envoyer(app(), req).await.0, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn limites_du_noyau_configurables() {
    let mut config = ServerConfig::default();
    config.limites.longueur_max = 3;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "expression": "1+2+3" }).to_string()))
        .unwrap();

    let (statut, octets) = envoyer(create_app(config), req).await;
    assert_eq!(statut, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_slice::<JsonValue>(&octets).unwrap(),
        json!({ "result": "Error" })
    );
}
