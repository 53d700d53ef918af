use actix_web::dev::Payload;
use actix_web::error::Error;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::headers::{BoolRequestHeader, RequestHeader};

/// Every htmx request header, read once.
///
/// Use it as an extractor when a handler needs more than one or two of the
/// headers; for a single check [`BoolRequestHeader::is`] or
/// [`RequestHeader::get`] is enough. Missing headers read as `false` or an
/// empty string, so extraction never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmxRequest {
    pub is_htmx: bool,
    pub boosted: bool,
    pub history_restore_request: bool,
    pub current_url: String,
    pub prompt: String,
    pub target: String,
    pub trigger_id: String,
    pub trigger_name: String,
}

impl HtmxRequest {
    pub fn new<M: HttpMessage>(req: &M) -> HtmxRequest {
        HtmxRequest {
            is_htmx: BoolRequestHeader::IS_REQUEST.is(req),
            boosted: BoolRequestHeader::IS_BOOSTED.is(req),
            history_restore_request: BoolRequestHeader::IS_HISTORY_RESTORE_REQUEST.is(req),
            current_url: RequestHeader::CURRENT_URL.get(req),
            prompt: RequestHeader::PROMPT.get(req),
            target: RequestHeader::TARGET.get(req),
            trigger_id: RequestHeader::TRIGGER_ID.get(req),
            trigger_name: RequestHeader::TRIGGER_NAME.get(req),
        }
    }
}

impl FromRequest for HtmxRequest {
    type Error = Error;
    type Future = Ready<Result<HtmxRequest, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(HtmxRequest::new(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{self, TestRequest};
    use actix_web::{web, App, HttpResponse};

    #[test]
    fn test_plain_request() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(HtmxRequest::new(&req), HtmxRequest::default());
    }

    #[actix_web::test]
    async fn test_extractor() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: HtmxRequest| async move {
                assert!(htmx.is_htmx);
                assert!(htmx.boosted);
                assert!(!htmx.history_restore_request);
                assert_eq!(htmx.current_url, "http://example.com");
                assert_eq!(htmx.prompt, "test prompt");
                assert_eq!(htmx.target, "#target");
                assert_eq!(htmx.trigger_id, "button1");
                assert_eq!(htmx.trigger_name, "save");
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/test")
            .insert_header(("hx-request", "true"))
            .insert_header(("hx-boosted", "true"))
            .insert_header(("hx-history-restore-request", "false"))
            .insert_header(("hx-current-url", "http://example.com"))
            .insert_header(("hx-prompt", "test prompt"))
            .insert_header(("hx-target", "#target"))
            .insert_header(("hx-trigger", "button1"))
            .insert_header(("hx-trigger-name", "save"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
