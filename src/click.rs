use crate::effect::Effect;
use crate::errors::ClickError;
use crate::models::{ClickData, WindowClient};
use crate::navigation::{find_matching_client, resolve_target};
use serde_json::Value;
use url::Url;

/// A click on a displayed notification or on one of its action buttons.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub notification_id: u64,
    pub data: Value,
    /// Empty or absent for a click on the notification body.
    pub action: Option<String>,
}

impl ClickEvent {
    pub fn targeted_action(&self) -> Option<&str> {
        self.action.as_deref().filter(|action| !action.is_empty())
    }
}

/// Picks the navigation target: the clicked action's `navigate`, or the
/// notification's own for a body click.
pub fn resolve_navigation(data: &Value, action: Option<&str>) -> Result<Option<String>, ClickError> {
    let data: ClickData = serde_json::from_value(data.clone())?;
    let target = match action {
        Some(action) => data
            .actions
            .into_iter()
            .find(|candidate| candidate.action == action)
            .and_then(|found| found.navigate),
        None => data.navigate,
    };
    Ok(target)
}

pub fn absolute_target(scope: &Url, target: &str) -> Result<Url, ClickError> {
    resolve_target(scope, target).map_err(|source| ClickError::InvalidUrl {
        target: target.to_string(),
        source,
    })
}

/// Focus a tab already showing the target, otherwise open a new one.
pub fn choose_destination(target: Url, clients: &[WindowClient]) -> Effect {
    match find_matching_client(clients, &target) {
        Some(client) => Effect::FocusClient(client.id),
        None => Effect::OpenWindow(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope() -> Url {
        Url::parse("https://x.test/service-worker.js").unwrap()
    }

    fn data() -> Value {
        json!({
            "title": "Hi",
            "navigate": "/inbox",
            "actions": [
                { "action": "view", "navigate": "/inbox/123" },
                { "action": "snooze", "title": "Snooze", "navigate": "/snoozed" },
                { "action": "dismiss", "title": "Dismiss" }
            ]
        })
    }

    fn click(action: Option<&str>) -> ClickEvent {
        ClickEvent {
            notification_id: 7,
            data: data(),
            action: action.map(str::to_string),
        }
    }

    fn window(id: u64, url: &str) -> WindowClient {
        WindowClient {
            id,
            url: url.to_string(),
            focused: false,
            controlled: true,
        }
    }

    #[test]
    fn body_click_uses_top_level_target() {
        assert_eq!(resolve_navigation(&data(), None).unwrap().as_deref(), Some("/inbox"));
        assert_eq!(click(Some("")).targeted_action(), None);
    }

    #[test]
    fn action_click_uses_action_target() {
        assert_eq!(
            resolve_navigation(&data(), Some("snooze")).unwrap().as_deref(),
            Some("/snoozed")
        );
        assert_eq!(
            resolve_navigation(&data(), Some("view")).unwrap().as_deref(),
            Some("/inbox/123")
        );
    }

    #[test]
    fn unknown_action_or_missing_target_does_nothing() {
        assert_eq!(resolve_navigation(&data(), Some("archive")).unwrap(), None);
        assert_eq!(resolve_navigation(&data(), Some("dismiss")).unwrap(), None);
    }

    #[test]
    fn null_actions_are_treated_as_empty() {
        let data = json!({ "title": "Hi", "navigate": "/inbox", "actions": null });
        assert_eq!(resolve_navigation(&data, Some("view")).unwrap(), None);
        assert_eq!(resolve_navigation(&data, None).unwrap().as_deref(), Some("/inbox"));
    }

    #[test]
    fn malformed_data_is_an_error() {
        assert!(matches!(
            resolve_navigation(&json!({ "actions": "nope" }), None),
            Err(ClickError::MalformedData(_))
        ));
        assert!(resolve_navigation(&Value::Null, None).is_err());
    }

    #[test]
    fn invalid_target_is_an_error() {
        assert!(matches!(
            absolute_target(&scope(), "http://[::1"),
            Err(ClickError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn matching_tab_is_focused() {
        let clients = vec![window(1, "https://x.test/"), window(2, "https://x.test/inbox#latest")];
        let target = absolute_target(&scope(), "/inbox").unwrap();
        assert_eq!(choose_destination(target, &clients), Effect::FocusClient(2));
    }

    #[test]
    fn no_matching_tab_opens_a_window() {
        let clients = vec![window(1, "https://x.test/inbox")];
        let event = click(Some("view"));
        let target = resolve_navigation(&event.data, event.targeted_action())
            .unwrap()
            .unwrap();
        let target = absolute_target(&scope(), &target).unwrap();
        assert_eq!(
            choose_destination(target, &clients),
            Effect::OpenWindow(Url::parse("https://x.test/inbox/123").unwrap())
        );
    }
}
