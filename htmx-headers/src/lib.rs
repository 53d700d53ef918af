//! # htmx-headers
//!
//! `htmx-headers` gives Actix Web handlers typed access to the headers htmx sends and understands.
//! Request headers are read straight from the request, response headers are written onto whatever
//! response you are building, and there is no middleware to register.
//!
//! ## Features
//!
//! - **Header Catalog**: Every htmx header as a constant on [`BoolRequestHeader`], [`RequestHeader`] or [`ResponseHeader`]
//! - **Type Safety**: Request headers can only be read and response headers can only be written
//! - **Redirects**: [`redirect`] and [`Redirect`] send `HX-Redirect` to htmx and a normal redirect to everyone else
//! - **Event Triggering**: [`TriggerEvents`] renders client side events, with or without JSON payloads
//! - **Extractor**: [`HtmxRequest`] collects every request header in one go
//!
//! # Getting Started
//!
//! ```no_run
//! use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
//! use htmx_headers::{BoolRequestHeader, RequestHeader, ResponseHeader};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| App::new().route("/", web::get().to(index)))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//!
//! async fn index(req: HttpRequest) -> impl Responder {
//!     if !BoolRequestHeader::IS_REQUEST.is(&req) {
//!         return HttpResponse::BadRequest().finish();
//!     }
//!     let mut res = HttpResponse::Ok();
//!     ResponseHeader::TRIGGER.set(&mut res, "myevent");
//!     res.body(format!("Hello {}", RequestHeader::CURRENT_URL.get(&req)))
//! }
//! ```

mod headers;
mod redirect;
mod request;
mod swap;
mod trigger;

pub use self::{
    headers::{BoolRequestHeader, HeaderWriter, RequestHeader, ResponseHeader},
    redirect::{redirect, Redirect},
    request::HtmxRequest,
    swap::SwapType,
    trigger::TriggerEvents,
};
