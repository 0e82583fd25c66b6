mod greeting;

pub use greeting::*;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::util::detail_response;

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
}

pub async fn health_check() -> impl Responder {
    web::Json(HealthStatus {
        status: "Hurray! We are online...",
    })
}

/// Fallback for requests no route matched.
pub async fn not_found() -> HttpResponse {
    detail_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Path matched but no route accepts the request method.
pub async fn method_not_allowed() -> HttpResponse {
    detail_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
