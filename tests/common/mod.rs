//! In-process arithmetic service for integration tests

#![allow(dead_code)]

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use color_eyre::eyre::Result;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base address
pub async fn spawn_server(app: Router) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// Arithmetic service answering like a JavaScript backend would:
/// whole numbers as JSON integers, non-finite values as strings.
pub fn calculator_app() -> Router {
    Router::new().route("/:operation/:lhs/:rhs", get(calculate))
}

async fn calculate(
    Path((operation, lhs, rhs)): Path<(String, String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let lhs: f64 = lhs.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let rhs: f64 = rhs.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let value = match operation.as_str() {
        "add" => lhs + rhs,
        "subtract" => lhs - rhs,
        "multiply" => lhs * rhs,
        "divide" => lhs / rhs,
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(json!({ "result": to_json_number(value) })))
}

fn to_json_number(value: f64) -> Value {
    if value.is_nan() {
        json!("NaN")
    } else if value.is_infinite() {
        json!(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

/// Service that answers every request with the given status and body
pub fn fixed_app(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/:operation/:lhs/:rhs",
        get(move || async move { (status, body) }),
    )
}

/// Base address where nothing is listening
pub async fn unreachable_address() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
