use crate::errors::PlatformError;
use crate::models::{BrowserData, DisplayedNotification, Permission, WindowClient};
use crate::worker::Platform;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

/// An in-memory browser: notification permission, a notification tray and
/// the open windows.
#[derive(Clone, Default)]
pub struct SimulatedBrowser {
    data: Arc<Mutex<BrowserData>>,
}

impl SimulatedBrowser {
    pub fn new(mut data: BrowserData) -> Self {
        data.reconcile_next_id();
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn snapshot(&self) -> BrowserData {
        self.data.lock().await.clone()
    }

    pub async fn set_permission(&self, permission: Permission) {
        self.data.lock().await.permission = permission;
    }

    pub async fn notification(&self, id: u64) -> Option<DisplayedNotification> {
        let data = self.data.lock().await;
        data.notifications.iter().find(|n| n.id == id).cloned()
    }
}

#[async_trait]
impl Platform for SimulatedBrowser {
    async fn permission(&self) -> Permission {
        self.data.lock().await.permission
    }

    async fn show_notification(&self, title: &str, options: Value) -> Result<u64, PlatformError> {
        let mut data = self.data.lock().await;
        let id = data.allocate_id();
        let attached = options.get("data").cloned().unwrap_or(Value::Null);
        data.notifications.push(DisplayedNotification {
            id,
            title: title.to_string(),
            options,
            data: attached,
            shown_at: Utc::now().to_rfc3339(),
            open: true,
        });
        Ok(id)
    }

    async fn close_notification(&self, id: u64) -> Result<(), PlatformError> {
        let mut data = self.data.lock().await;
        let notification = data
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(PlatformError::UnknownNotification(id))?;
        notification.open = false;
        Ok(())
    }

    async fn match_all_clients(&self, include_uncontrolled: bool) -> Result<Vec<WindowClient>, PlatformError> {
        let data = self.data.lock().await;
        Ok(data
            .windows
            .iter()
            .filter(|w| include_uncontrolled || w.controlled)
            .cloned()
            .collect())
    }

    async fn focus_client(&self, id: u64) -> Result<(), PlatformError> {
        let mut data = self.data.lock().await;
        if !data.windows.iter().any(|w| w.id == id) {
            return Err(PlatformError::UnknownClient(id));
        }
        for window in &mut data.windows {
            window.focused = window.id == id;
        }
        debug!(id, "window focused");
        Ok(())
    }

    async fn open_window(&self, url: &Url) -> Result<u64, PlatformError> {
        let mut data = self.data.lock().await;
        let id = data.allocate_id();
        for window in &mut data.windows {
            window.focused = false;
        }
        data.windows.push(WindowClient {
            id,
            url: url.to_string(),
            focused: true,
            controlled: true,
        });
        debug!(id, %url, "window opened");
        Ok(id)
    }

    async fn skip_waiting(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), PlatformError> {
        let mut data = self.data.lock().await;
        for window in &mut data.windows {
            window.controlled = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn close_is_idempotent_and_rejects_unknown_ids() {
        let browser = SimulatedBrowser::default();
        let id = browser
            .show_notification("Hi", json!({ "data": { "title": "Hi" } }))
            .await
            .unwrap();
        browser.close_notification(id).await.unwrap();
        browser.close_notification(id).await.unwrap();
        assert!(!browser.notification(id).await.unwrap().open);
        assert_eq!(
            browser.close_notification(99).await,
            Err(PlatformError::UnknownNotification(99))
        );
    }

    #[tokio::test]
    async fn uncontrolled_windows_are_listed_on_request() {
        let browser = SimulatedBrowser::new(BrowserData {
            windows: vec![WindowClient {
                id: 1,
                url: "https://x.test/".to_string(),
                focused: false,
                controlled: false,
            }],
            next_id: 1,
            ..BrowserData::default()
        });
        assert!(browser.match_all_clients(false).await.unwrap().is_empty());
        assert_eq!(browser.match_all_clients(true).await.unwrap().len(), 1);
        assert_eq!(browser.focus_client(5).await, Err(PlatformError::UnknownClient(5)));
    }

    #[tokio::test]
    async fn ids_continue_after_state_without_next_id() {
        let data: BrowserData =
            serde_json::from_value(json!({ "windows": [{ "id": 1, "url": "https://x.test/a" }] })).unwrap();
        assert_eq!(data.next_id, 0);
        let browser = SimulatedBrowser::new(data);

        let id = browser.open_window(&Url::parse("https://x.test/b").unwrap()).await.unwrap();
        assert_eq!(id, 2);
        browser.focus_client(1).await.unwrap();
        let snapshot = browser.snapshot().await;
        let focused: Vec<_> = snapshot.windows.iter().filter(|w| w.focused).map(|w| w.id).collect();
        assert_eq!(focused, vec![1]);
    }

    #[tokio::test]
    async fn opened_window_takes_focus() {
        let browser = SimulatedBrowser::default();
        let first = browser.open_window(&Url::parse("https://x.test/a").unwrap()).await.unwrap();
        let second = browser.open_window(&Url::parse("https://x.test/b").unwrap()).await.unwrap();
        assert_ne!(first, second);
        browser.focus_client(first).await.unwrap();
        let snapshot = browser.snapshot().await;
        assert!(snapshot.windows[0].focused);
        assert!(!snapshot.windows[1].focused);
    }
}
