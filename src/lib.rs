//! # shopfront
//!
//! A small server-rendered catalog browser. Four category pages and a JSON
//! "load more cards" endpoint, all read from a static property file loaded
//! once at start-up.
//!
//! - Radix-tree routing via [`matchit`]
//! - HTTP/1.1 and HTTP/2 via hyper, on tokio
//! - Graceful shutdown on SIGTERM / Ctrl-C, draining in-flight requests
//! - PJAX-aware views: fragment for `X-PJAX` requests, full-page shell
//!   otherwise
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shopfront::catalog::Properties;
//! use shopfront::{routes, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shopfront::Error> {
//!     let props = Properties::load("config/catalog.toml".as_ref())?;
//!
//!     Server::bind("0.0.0.0:8080".parse().unwrap())
//!         .serve(routes::router(), Arc::new(props))
//!         .await
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod catalog;
pub mod config;
pub mod health;
pub mod logging;
pub mod routes;
pub mod views;

pub(crate) mod middleware;

pub use error::Error;
pub use handler::Handler;
pub use http::{Method, StatusCode};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
