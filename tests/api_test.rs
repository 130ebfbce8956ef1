use std::io::Write;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::tempdir;
use tower::ServiceExt;

use grocer_backend::catalog::{CatalogSource, PRICE_COLUMN};
use grocer_backend::router::app_router;
use grocer_backend::state::AppState;

fn app_with_catalog(catalog: CatalogSource) -> axum::Router {
    app_router(AppState { catalog })
}

fn empty_catalog() -> CatalogSource {
    CatalogSource::from_candidates(vec!["no-such-catalog.csv".into()])
}

async fn get(app: axum::Router, uri: &str) -> Result<(StatusCode, HeaderMap, Vec<u8>)> {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, headers, body.to_vec()))
}

#[tokio::test]
async fn health_reports_ok_even_without_a_catalog() -> Result<()> {
    let (status, _, body) = get(app_with_catalog(empty_catalog()), "/health").await?;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body)?;
    assert_eq!(json["ok"], Value::Bool(true));
    assert_eq!(json["csv"], Value::String("NOT FOUND".to_string()));
    Ok(())
}

#[tokio::test]
async fn health_reports_the_resolved_path() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("products.csv");
    std::fs::File::create(&path)?.write_all(b"name\nRice\n")?;

    let catalog = CatalogSource::from_candidates(vec![path.clone()]);
    let (status, _, body) = get(app_with_catalog(catalog), "/health").await?;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body)?;
    assert_eq!(json["csv"], Value::String(path.display().to_string()));
    Ok(())
}

#[tokio::test]
async fn products_serves_cleaned_records() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("products.csv");
    let csv = format!(
        "\u{feff}name,{price}\nRice [cite: 4],\"12,50\"\nOlive Oil,١٥\n",
        price = PRICE_COLUMN
    );
    std::fs::File::create(&path)?.write_all(csv.as_bytes())?;

    let catalog = CatalogSource::from_candidates(vec![path]);
    let (status, headers, body) = get(app_with_catalog(catalog), "/products").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").map(|v| v.to_str().unwrap()),
        Some("application/json")
    );

    let json: Value = serde_json::from_slice(&body)?;
    let records = json.as_array().expect("expected a JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], Value::String("Rice".to_string()));
    assert_eq!(records[0][PRICE_COLUMN], Value::from(12.5));
    assert_eq!(records[1][PRICE_COLUMN], Value::from(15.0));
    Ok(())
}

#[tokio::test]
async fn products_fails_loudly_when_no_catalog_exists() -> Result<()> {
    let (status, _, body) = get(app_with_catalog(empty_catalog()), "/products").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body = String::from_utf8(body)?;
    assert!(body.starts_with("/products failed:"), "body was: {}", body);
    assert!(body.contains("no catalog file found"), "body was: {}", body);
    Ok(())
}

#[tokio::test]
async fn every_route_allows_any_origin() -> Result<()> {
    for uri in ["/health", "/", "/products"] {
        let (_, headers, _) = get(app_with_catalog(empty_catalog()), uri).await?;
        assert_eq!(
            headers
                .get("access-control-allow-origin")
                .unwrap_or_else(|| panic!("route {} lacks a CORS header", uri))
                .to_str()?,
            "*"
        );
    }
    Ok(())
}
