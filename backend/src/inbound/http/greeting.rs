//! Greeting endpoints.
//!
//! ```text
//! GET /                 -> Aplikasi Spring Boot Anda berjalan!
//! GET /greet?name=Budi  -> Halo, Budi!
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::domain::greeting::{greet_with_name, say_hello};

/// Query pairs in arrival order; the first `name` wins when repeated.
type QueryPairs = web::Query<Vec<(String, String)>>;

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn plain_text(body: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body.into())
}

/// Report that the service is running.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use techassessment::inbound::http::greeting::index;
///
/// let app = App::new().service(index);
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    ),
    tags = ["greeting"],
    operation_id = "sayHello"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    plain_text(say_hello())
}

/// Greet the caller by name, or as `Guest` when `name` is absent.
///
/// An empty `name` is echoed as given.
#[utoipa::path(
    get,
    path = "/greet",
    params(
        ("name" = Option<String>, Query, description = "Name to greet", example = "Budi")
    ),
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tags = ["greeting"],
    operation_id = "greet"
)]
#[get("/greet")]
pub async fn greet(query: QueryPairs) -> HttpResponse {
    plain_text(greet_with_name(first_value(&query, "name")))
}
