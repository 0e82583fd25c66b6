use std::fmt::Debug;

use actix_web::{body::BoxBody, http::StatusCode, web, HttpResponse, ResponseError};

use crate::{
    config::CustomerConfig,
    domain::{Customer, UnknownCustomer},
    util::{detail_response, error_chain_fmt},
};

#[derive(serde::Serialize)]
struct Greeting {
    response: &'static str,
}

#[tracing::instrument(name = "resolving customer greeting", skip(customer), fields(customer_name = ?customer.name))]
pub async fn greet(customer: web::Data<CustomerConfig>) -> Result<HttpResponse, GreetingError> {
    let customer = Customer::parse(customer.name.as_deref().unwrap_or_default()).map_err(|e| {
        tracing::warn!(customer = e.name(), "unknown customer.");
        e
    })?;
    tracing::info!(customer = customer.as_str(), "customer resolved.");

    Ok(HttpResponse::Ok().json(Greeting {
        response: customer.greeting(),
    }))
}

#[derive(thiserror::Error)]
pub enum GreetingError {
    #[error("Oh Human! It is not a good day for us... We couldn't find your Customer :(")]
    UnknownCustomer(#[from] UnknownCustomer),
}

impl Debug for GreetingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GreetingError {
    fn status_code(&self) -> StatusCode {
        match self {
            GreetingError::UnknownCustomer(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        detail_response(self.status_code(), &self.to_string())
    }
}
