use actix_web::body::BoxBody;
use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, HttpResponseBuilder, Responder};
use log::warn;

use crate::headers::{BoolRequestHeader, HeaderWriter, ResponseHeader};

/// Replies to the request with a redirect to `url`.
///
/// Requests sent by htmx get an `HX-Redirect` header and keep whatever status
/// `res` already has, so the navigation happens on the client. Any other
/// request gets a plain HTTP redirect: `status` plus a `Location` header.
///
/// A `url` that isn't a legal header value is logged and `res` is left as it
/// was, status included.
///
/// ```
/// use actix_web::http::StatusCode;
/// use actix_web::{HttpRequest, HttpResponse};
/// use htmx_headers::redirect;
///
/// async fn logout(req: HttpRequest) -> HttpResponse {
///     let mut res = HttpResponse::Ok();
///     redirect(&mut res, &req, "/login", StatusCode::SEE_OTHER);
///     res.finish()
/// }
/// ```
pub fn redirect<M: HttpMessage>(
    res: &mut HttpResponseBuilder,
    req: &M,
    url: &str,
    status: StatusCode,
) {
    let value = match HeaderValue::from_str(url) {
        Ok(value) => value,
        Err(_) => {
            warn!("Refusing redirect to invalid url: {}", url);
            return;
        }
    };

    if !BoolRequestHeader::IS_REQUEST.is(req) {
        res.status(status);
        res.set_header(LOCATION, value);
        return;
    }

    res.set_header(ResponseHeader::REDIRECT.name(), value);
}

/// A [`Responder`] that performs [`redirect`] with an empty body.
///
/// Defaults to `302 Found` for requests that don't come from htmx.
#[derive(Clone, Debug)]
pub struct Redirect {
    url: String,
    status: StatusCode,
}

impl Redirect {
    /// Redirect to `url` with `302 Found`.
    pub fn to(url: impl Into<String>) -> Self {
        Redirect {
            url: url.into(),
            status: StatusCode::FOUND,
        }
    }

    /// Use `303 See Other`, the usual reply to a form submission.
    pub fn see_other(self) -> Self {
        self.using_status_code(StatusCode::SEE_OTHER)
    }

    /// Use `308 Permanent Redirect`.
    pub fn permanent(self) -> Self {
        self.using_status_code(StatusCode::PERMANENT_REDIRECT)
    }

    /// Use `status` for requests that don't come from htmx.
    pub fn using_status_code(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl Responder for Redirect {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut res = HttpResponse::Ok();
        redirect(&mut res, req, &self.url, self.status);
        res.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{self, TestRequest};
    use actix_web::{web, App};

    #[test]
    fn test_plain_redirect() {
        let req = TestRequest::default().to_http_request();
        let mut res = HttpResponse::Ok();
        redirect(&mut res, &req, "/next", StatusCode::FOUND);
        let res = res.finish();

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(LOCATION).unwrap(), "/next");
        assert!(res.headers().get("hx-redirect").is_none());
    }

    #[test]
    fn test_plain_redirect_when_not_exactly_true() {
        let req = TestRequest::default()
            .insert_header(("hx-request", "false"))
            .to_http_request();
        let mut res = HttpResponse::Ok();
        redirect(&mut res, &req, "/next", StatusCode::SEE_OTHER);
        let res = res.finish();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(LOCATION).unwrap(), "/next");
    }

    #[test]
    fn test_htmx_redirect() {
        let req = TestRequest::default()
            .insert_header(("hx-request", "true"))
            .to_http_request();
        let mut res = HttpResponse::Ok();
        redirect(&mut res, &req, "/next", StatusCode::FOUND);
        let res = res.finish();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get("hx-redirect").unwrap(), "/next");
        assert!(res.headers().get(LOCATION).is_none());
    }

    #[test]
    fn test_invalid_url_leaves_plain_response_untouched() {
        let req = TestRequest::default().to_http_request();
        let mut res = HttpResponse::Ok();
        redirect(&mut res, &req, "/next\r\nx: y", StatusCode::FOUND);
        let res = res.finish();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(LOCATION).is_none());
        assert!(res.headers().get("x").is_none());
    }

    #[test]
    fn test_invalid_url_leaves_htmx_response_untouched() {
        let req = TestRequest::default()
            .insert_header(("hx-request", "true"))
            .to_http_request();
        let mut res = HttpResponse::Ok();
        redirect(&mut res, &req, "/next\r\nx: y", StatusCode::FOUND);
        let res = res.finish();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get("hx-redirect").is_none());
        assert!(res.headers().get(LOCATION).is_none());
    }

    #[actix_web::test]
    async fn test_redirect_responder() {
        let app = test::init_service(App::new().route(
            "/logout",
            web::post().to(|| async { Redirect::to("/login").see_other() }),
        ))
        .await;

        let req = TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

        let req = TestRequest::post()
            .uri("/logout")
            .insert_header(("HX-Request", "true"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("hx-redirect").unwrap(), "/login");
        assert!(resp.headers().get(LOCATION).is_none());
    }
}
