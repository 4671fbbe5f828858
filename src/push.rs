use crate::effect::Effect;
use crate::errors::PushRejection;
use crate::models::{Permission, WEB_PUSH_MARKER};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Reads push bytes as JSON. Missing or unparseable data becomes `{}`.
pub fn parse_payload(data: Option<&[u8]>) -> Value {
    data.and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok())
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Checks the payload shape and returns the title and the notification object.
pub fn validate_payload(payload: &Value) -> Result<(String, Map<String, Value>), PushRejection> {
    let marker = payload.get("web_push").and_then(Value::as_f64);
    if marker != Some(f64::from(WEB_PUSH_MARKER)) {
        return Err(PushRejection::MarkerMismatch);
    }

    let notification = payload
        .get("notification")
        .and_then(Value::as_object)
        .ok_or(PushRejection::MissingNotification)?;

    match notification.get("title").and_then(Value::as_str) {
        Some(title) if !title.is_empty() => Ok((title.to_string(), notification.clone())),
        _ => Err(PushRejection::MissingTitle),
    }
}

/// The notification object doubles as display options and as attached data.
pub fn show_notification(title: String, notification: Map<String, Value>) -> Effect {
    let data = Value::Object(notification.clone());
    let mut options = notification;
    options.insert("data".to_string(), data);
    Effect::ShowNotification {
        title,
        options: Value::Object(options),
    }
}

pub fn handle_push(data: Option<&[u8]>, permission: Permission) -> Effect {
    if !permission.is_granted() {
        debug!(?permission, "notifications not granted, ignoring push");
        return Effect::None;
    }

    let payload = parse_payload(data);
    match validate_payload(&payload) {
        Ok((title, notification)) => show_notification(title, notification),
        Err(rejection) => {
            warn!(%rejection, %payload, "dropping push message");
            Effect::None
        }
    }
}
