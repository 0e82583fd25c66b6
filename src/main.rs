use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use greeter::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber("greeter", std::io::stdout);

    let config = greeter::config::config().context("failed to load configuration.")?;
    let address = config.web.server_address();
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("failed to bind web port {address}."))?;

    tracing::info!(
        %address,
        customer = ?config.customer.name,
        "starting greeter service."
    );

    greeter::run(listener, web::Data::new(config.customer)).await?;
    Ok(())
}
