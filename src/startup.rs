use std::net::TcpListener;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{config::CustomerConfig, routes};

pub async fn run(
    listener: TcpListener,
    customer: web::Data<CustomerConfig>,
) -> Result<(), std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(customer.clone())
            .service(
                web::resource("/")
                    .route(web::get().to(routes::greet))
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .service(
                web::resource("/health")
                    .route(web::get().to(routes::health_check))
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .default_service(web::to(routes::not_found))
    })
    .listen(listener)?
    .run();

    server.await
}
