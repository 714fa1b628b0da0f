//! shopfront server binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/
//!   curl -H 'X-PJAX: true' http://localhost:8080/jewelry
//!   curl -H 'Accept: application/json' http://localhost:8080/cards/shoes

use std::sync::Arc;

use shopfront::catalog::Properties;
use shopfront::config::{Config, SystemEnvironment};
use shopfront::{logging, routes, Error, Server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env(&SystemEnvironment)?;
    logging::init(config.log_format);

    let props = Properties::load(&config.catalog_path)?;

    Server::bind(config.addr)
        .serve(routes::router(), Arc::new(props))
        .await
}
