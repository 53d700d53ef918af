use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use serde_json::Value;

use crate::headers::{HeaderWriter, ResponseHeader};

/// Client side events for one of the `HX-Trigger*` response headers.
///
/// Events keep the order they were added in. When none of them carries a
/// payload the header is the plain list `first,second`; otherwise it is a
/// JSON object mapping each event name to its payload, or `null`.
///
/// ```
/// use actix_web::HttpResponse;
/// use htmx_headers::{ResponseHeader, TriggerEvents};
///
/// let mut res = HttpResponse::Ok();
/// TriggerEvents::new()
///     .event("saved")
///     .with_value("notify", serde_json::json!({ "level": "info" }))
///     .write_to(&mut res, ResponseHeader::TRIGGER_AFTER_SWAP);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerEvents {
    events: IndexMap<String, Option<Value>>,
}

impl TriggerEvents {
    pub fn new() -> Self {
        TriggerEvents::default()
    }

    /// Adds an event without a payload. Adding a name twice replaces the
    /// earlier entry but keeps its position.
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.events.insert(name.into(), None);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.events.insert(name.into(), Some(value));
        self
    }

    /// Adds an event whose payload is any serializable value.
    pub fn with_json<T>(self, name: impl Into<String>, value: T) -> serde_json::Result<Self>
    where
        T: Serialize,
    {
        let value = serde_json::to_value(value)?;
        Ok(self.with_value(name, value))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn is_simple(&self) -> bool {
        self.events.values().all(Option::is_none)
    }

    pub fn to_header_value(&self) -> serde_json::Result<String> {
        if self.is_simple() {
            return Ok(self.events.keys().cloned().collect::<Vec<_>>().join(","));
        }
        serde_json::to_string(&self.events)
    }

    /// Writes the events to `header`, which must be one of
    /// [`ResponseHeader::TRIGGER`], [`ResponseHeader::TRIGGER_AFTER_SETTLE`]
    /// or [`ResponseHeader::TRIGGER_AFTER_SWAP`]. Nothing is written for an
    /// empty set.
    pub fn write_to<W: HeaderWriter + ?Sized>(&self, res: &mut W, header: ResponseHeader) {
        let trigger_headers = [
            ResponseHeader::TRIGGER,
            ResponseHeader::TRIGGER_AFTER_SETTLE,
            ResponseHeader::TRIGGER_AFTER_SWAP,
        ];
        if !trigger_headers.contains(&header) {
            warn!("{} is not a trigger header, events not written", header);
            return;
        }
        if self.is_empty() {
            return;
        }

        match self.to_header_value() {
            Ok(value) => header.set(res, &value),
            Err(e) => warn!("Failed to serialize {} header: {}", header, e),
        }
    }
}
