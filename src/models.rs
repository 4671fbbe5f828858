use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker every push payload must carry in its `web_push` field.
pub const WEB_PUSH_MARKER: u16 = 8030;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// A URL to open when the user clicks the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Keeps the notification on screen until the user clicks or dismisses it.
    #[serde(rename = "requireInteraction", skip_serializing_if = "Option::is_none")]
    pub require_interaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
    /// Other display options, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationAction {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
}

/// The part of a notification's attached data the click handler reads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClickData {
    #[serde(default)]
    pub navigate: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<NotificationAction>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub web_push: WebPushDisambiguator,
    pub notification: Notification,
}

impl From<Notification> for PushMessage {
    fn from(notification: Notification) -> Self {
        Self {
            web_push: WebPushDisambiguator,
            notification,
        }
    }
}

impl PushMessage {
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Serializes as the constant [`WEB_PUSH_MARKER`].
#[derive(Debug, Clone, Copy)]
pub struct WebPushDisambiguator;

impl Serialize for WebPushDisambiguator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(WEB_PUSH_MARKER)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    #[default]
    Default,
}

impl Permission {
    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayedNotification {
    pub id: u64,
    pub title: String,
    pub options: Value,
    pub data: Value,
    pub shown_at: String,
    pub open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowClient {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub controlled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BrowserData {
    #[serde(default)]
    pub permission: Permission,
    #[serde(default)]
    pub notifications: Vec<DisplayedNotification>,
    #[serde(default)]
    pub windows: Vec<WindowClient>,
    #[serde(default)]
    pub next_id: u64,
}

impl BrowserData {
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }

    /// Moves `next_id` past every window and notification id already in use.
    pub fn reconcile_next_id(&mut self) {
        let highest = self
            .windows
            .iter()
            .map(|w| w.id)
            .chain(self.notifications.iter().map(|n| n.id))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(highest);
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ClickRequest {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWindowRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PermissionRequest {
    pub permission: Permission,
}
