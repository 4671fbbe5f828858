use serde_json::Value;
use url::Url;

/// What a handler asks the platform to do. Executed by [`crate::worker::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ShowNotification { title: String, options: Value },
    CloseNotification(u64),
    FocusClient(u64),
    OpenWindow(Url),
    SkipWaiting,
    ClaimClients,
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
