//! The catalog's HTTP surface.
//!
//! | Route | Response |
//! |---|---|
//! | `/`, `/jewelry`, `/shoes`, `/clothing` | category page, fragment or shell depending on `X-PJAX` |
//! | `/cards/{cardtype}` | JSON array of one page of items |
//! | `/healthz`, `/readyz` | health checks |

use std::sync::Arc;

use http::header::ACCEPT;
use http::StatusCode;
use tracing::error;

use crate::catalog::{self, Category, Properties};
use crate::health;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::views::{PageModel, PJAX_HEADER};

/// Builds the application router. Serve it with the loaded [`Properties`].
pub fn router() -> Router<Properties> {
    Router::new()
        .get("/",                  all)
        .get("/jewelry",           jewelry)
        .get("/shoes",             shoes)
        .get("/clothing",          clothing)
        .get("/cards/{cardtype}",  cards)
        .get("/healthz",           health::liveness)
        .get("/readyz",            health::readiness)
}

// GET /
async fn all(req: Request, props: Arc<Properties>) -> Response {
    category_page(Category::All, &req, &props)
}

// GET /jewelry
async fn jewelry(req: Request, props: Arc<Properties>) -> Response {
    category_page(Category::Jewelry, &req, &props)
}

// GET /shoes
async fn shoes(req: Request, props: Arc<Properties>) -> Response {
    category_page(Category::Shoes, &req, &props)
}

// GET /clothing
async fn clothing(req: Request, props: Arc<Properties>) -> Response {
    category_page(Category::Clothing, &req, &props)
}

/// Renders one category page. Any `X-PJAX` header, even an empty one,
/// selects the fragment.
fn category_page(category: Category, req: &Request, props: &Properties) -> Response {
    let items = catalog::page(category, props);
    let model = PageModel::select(category, items, req.has_header(PJAX_HEADER));

    match model.render() {
        Ok(html) => Response::builder()
            .header("x-view", model.view_name)
            .header("vary", "X-PJAX")
            .html(html),
        Err(e) => {
            error!(view = model.view_name, "template rendering failed: {e}");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// GET /cards/{cardtype}
//
// Always the first page of the category; unknown card types get shoes.
async fn cards(req: Request, props: Arc<Properties>) -> Response {
    if !accepts_json(&req) {
        return Response::builder()
            .status(StatusCode::NOT_ACCEPTABLE)
            .text("application/json is the only representation of /cards");
    }

    let category = Category::from_card_type(req.param("cardtype").unwrap_or_default());
    Json(catalog::page(category, &*props)).into_response()
}

/// Whether the `Accept` header admits `application/json`.
///
/// Every `Accept` line counts as part of one list. The most specific range
/// matching `application/json` decides, and `q=0` on it means "not this".
/// A request without `Accept` accepts anything.
fn accepts_json(req: &Request) -> bool {
    let mut lines = req.headers().get_all(ACCEPT).iter().peekable();
    if lines.peek().is_none() {
        return true;
    }

    let best = lines
        .filter_map(|line| line.to_str().ok())
        .flat_map(|line| line.split(','))
        .filter_map(json_match)
        .max_by_key(|(specificity, _)| *specificity);

    matches!(best, Some((_, q)) if q > 0.0)
}

/// For a media range that covers `application/json`, its specificity
/// (`*/*` = 0, `application/*` = 1, exact = 2) and quality.
fn json_match(range: &str) -> Option<(u8, f32)> {
    let mut parts = range.split(';');
    let media = parts.next().unwrap_or_default().trim();
    let specificity = if media.eq_ignore_ascii_case("application/json") {
        2
    } else if media.eq_ignore_ascii_case("application/*") {
        1
    } else if media == "*/*" {
        0
    } else {
        return None;
    };

    let q = parts
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
        .and_then(|(_, value)| value.trim().parse::<f32>().ok())
        .unwrap_or(1.0);

    Some((specificity, q))
}
