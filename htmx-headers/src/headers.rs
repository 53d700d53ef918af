use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{HttpMessage, HttpResponse, HttpResponseBuilder};
use log::{debug, warn};
use std::fmt;

/// One of the htmx request headers that carries a boolean, listed in
/// <https://htmx.org/reference/#request_headers>.
///
/// Only the exact value `true` counts as set. A missing header, `True`, `1`
/// or an empty value all read as `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoolRequestHeader(&'static str);

/// One of the htmx request headers that carries a string, listed in
/// <https://htmx.org/reference/#request_headers>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestHeader(&'static str);

/// One of the htmx response headers listed in
/// <https://htmx.org/reference/#response_headers>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResponseHeader(&'static str);

impl BoolRequestHeader {
    /// `HX-Boosted`: the request is via an element using hx-boost.
    pub const IS_BOOSTED: BoolRequestHeader = BoolRequestHeader("hx-boosted");
    /// `HX-History-Restore-Request`: the request is for history restoration
    /// after a miss in the local history cache.
    pub const IS_HISTORY_RESTORE_REQUEST: BoolRequestHeader =
        BoolRequestHeader("hx-history-restore-request");
    /// `HX-Request`: always `true` for requests issued by htmx.
    pub const IS_REQUEST: BoolRequestHeader = BoolRequestHeader("hx-request");

    /// Every boolean request header htmx sends.
    pub const ALL: &'static [BoolRequestHeader] = &[
        Self::IS_BOOSTED,
        Self::IS_HISTORY_RESTORE_REQUEST,
        Self::IS_REQUEST,
    ];

    /// Returns `true` only when the header value is exactly `true`.
    pub fn is<M: HttpMessage>(&self, req: &M) -> bool {
        req.headers()
            .get(self.0)
            .map_or(false, |value| value.as_bytes() == b"true")
    }
}

impl RequestHeader {
    /// `HX-Current-URL`: the current URL of the browser.
    pub const CURRENT_URL: RequestHeader = RequestHeader("hx-current-url");
    /// `HX-Prompt`: the user response to an hx-prompt.
    pub const PROMPT: RequestHeader = RequestHeader("hx-prompt");
    /// `HX-Target`: the id of the target element if it exists.
    pub const TARGET: RequestHeader = RequestHeader("hx-target");
    /// `HX-Trigger-Name`: the name of the triggered element if it exists.
    pub const TRIGGER_NAME: RequestHeader = RequestHeader("hx-trigger-name");
    /// `HX-Trigger`: the id of the triggered element if it exists.
    ///
    /// Shares its wire name with [`ResponseHeader::TRIGGER`], which fires
    /// client side events instead.
    pub const TRIGGER_ID: RequestHeader = RequestHeader("hx-trigger");

    /// Every string request header htmx sends.
    pub const ALL: &'static [RequestHeader] = &[
        Self::CURRENT_URL,
        Self::PROMPT,
        Self::TARGET,
        Self::TRIGGER_NAME,
        Self::TRIGGER_ID,
    ];

    /// Returns the header value, or an empty string if it isn't set.
    ///
    /// Non-ASCII values are decoded as UTF-8, with invalid sequences replaced
    /// by `U+FFFD`.
    pub fn get<M: HttpMessage>(&self, req: &M) -> String {
        match req.headers().get(self.0) {
            Some(value) => match value.to_str() {
                Ok(value) => value.to_string(),
                Err(_) => {
                    debug!("Decoding non-ASCII {} header value as UTF-8", self.0);
                    String::from_utf8_lossy(value.as_bytes()).into_owned()
                }
            },
            None => String::new(),
        }
    }
}

impl ResponseHeader {
    /// `HX-Location`: a client-side redirect without a full page reload.
    pub const LOCATION: ResponseHeader = ResponseHeader("hx-location");
    /// `HX-Push-Url`: pushes a new url into the history stack.
    pub const PUSH_URL: ResponseHeader = ResponseHeader("hx-push-url");
    /// `HX-Redirect`: a client-side redirect to a new location.
    pub const REDIRECT: ResponseHeader = ResponseHeader("hx-redirect");
    /// `HX-Refresh`: a full client side refresh if set to `true`.
    pub const REFRESH: ResponseHeader = ResponseHeader("hx-refresh");
    /// `HX-Replace-Url`: replaces the current URL in the location bar.
    pub const REPLACE_URL: ResponseHeader = ResponseHeader("hx-replace-url");
    /// `HX-Reswap`: how the response will be swapped, see
    /// [`SwapType`](crate::SwapType).
    pub const RESWAP: ResponseHeader = ResponseHeader("hx-reswap");
    /// `HX-Retarget`: a CSS selector that moves the content update to a
    /// different element on the page.
    pub const RETARGET: ResponseHeader = ResponseHeader("hx-retarget");
    /// `HX-Reselect`: a CSS selector choosing which part of the response is
    /// swapped in. Overrides an existing hx-select on the triggering element.
    pub const RESELECT: ResponseHeader = ResponseHeader("hx-reselect");
    /// `HX-Trigger`: client side events fired as soon as the response is
    /// received.
    ///
    /// See [`RequestHeader::TRIGGER_ID`] for the `HX-Trigger` request header.
    pub const TRIGGER: ResponseHeader = ResponseHeader("hx-trigger");
    /// `HX-Trigger-After-Settle`: client side events fired after the settle step.
    pub const TRIGGER_AFTER_SETTLE: ResponseHeader = ResponseHeader("hx-trigger-after-settle");
    /// `HX-Trigger-After-Swap`: client side events fired after the swap step.
    pub const TRIGGER_AFTER_SWAP: ResponseHeader = ResponseHeader("hx-trigger-after-swap");

    /// Every response header htmx understands.
    pub const ALL: &'static [ResponseHeader] = &[
        Self::LOCATION,
        Self::PUSH_URL,
        Self::REDIRECT,
        Self::REFRESH,
        Self::REPLACE_URL,
        Self::RESWAP,
        Self::RETARGET,
        Self::RESELECT,
        Self::TRIGGER,
        Self::TRIGGER_AFTER_SETTLE,
        Self::TRIGGER_AFTER_SWAP,
    ];

    /// Sets the header on `res`, replacing any value already there.
    ///
    /// A value that isn't a legal header value (one containing a newline, for
    /// instance) is logged and dropped, leaving `res` untouched.
    pub fn set<W: HeaderWriter + ?Sized>(&self, res: &mut W, value: &str) {
        write_header(res, self.name(), value);
    }
}

macro_rules! wire_name {
    ($($kind:ident),* $(,)?) => {$(
        impl $kind {
            /// The lowercase wire name of the header.
            pub const fn as_str(&self) -> &'static str {
                self.0
            }

            /// The header name, ready to insert into a `HeaderMap`.
            pub fn name(&self) -> HeaderName {
                HeaderName::from_static(self.0)
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }

        impl From<$kind> for HeaderName {
            fn from(header: $kind) -> HeaderName {
                header.name()
            }
        }
    )*};
}

wire_name!(BoolRequestHeader, RequestHeader, ResponseHeader);

/// Anything htmx response headers can be written to.
pub trait HeaderWriter {
    /// Inserts `value` under `name`, replacing any previous values.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
}

impl HeaderWriter for HeaderMap {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }
}

impl<B> HeaderWriter for HttpResponse<B> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }
}

impl HeaderWriter for HttpResponseBuilder {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert_header((name, value));
    }
}

pub(crate) fn write_header<W: HeaderWriter + ?Sized>(res: &mut W, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => res.set_header(name, value),
        Err(_) => warn!("Failed to parse {} header value: {}", name, value),
    }
}
