//! CEP lookup against a loopback stand-in for the postal service.

mod common;

use std::time::Duration;

use aff_api::{ApiError, PostalClient};
use pretty_assertions::assert_eq;

fn postal(base_url: &str) -> PostalClient {
    PostalClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn known_cep_resolves_to_address() {
    let server = common::serve(vec![(
        200,
        r#"{"cep":"80010-000","logradouro":"Rua XV de Novembro","bairro":"Centro","localidade":"Curitiba","uf":"PR"}"#,
    )]);
    let address = postal(&server.base_url)
        .lookup("80010-000")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(address.cep, "80010000");
    assert_eq!(address.city, "Curitiba");
    assert_eq!(address.state, "PR");

    let seen = server.finish();
    assert_eq!(seen[0].url, "/api/ws/80010000/json/");
    assert_eq!(seen[0].authorization, None);
}

#[tokio::test]
async fn unknown_cep_is_none() {
    let server = common::serve(vec![(200, r#"{"erro": true}"#)]);
    assert_eq!(postal(&server.base_url).lookup("99999999").await.unwrap(), None);
    server.finish();
}

#[tokio::test]
async fn short_cep_fails_before_any_request() {
    let server = common::serve(vec![]);
    let error = postal(&server.base_url).lookup("1234").await.unwrap_err();
    assert!(matches!(error, ApiError::Validation(_)));
    assert!(server.finish().is_empty());
}

#[tokio::test]
async fn unreachable_service_is_postal_error() {
    let error = postal(&common::dead_base_url())
        .lookup("80010000")
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Postal(_)));
}
