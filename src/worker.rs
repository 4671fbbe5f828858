use crate::click::{absolute_target, choose_destination, resolve_navigation, ClickEvent};
use crate::effect::Effect;
use crate::errors::{ClickError, PlatformError, WorkerError};
use crate::models::{Permission, WindowClient};
use crate::push::handle_push;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use url::Url;

/// The browser surface a service worker talks to: notifications and clients.
#[async_trait]
pub trait Platform: Send + Sync {
    async fn permission(&self) -> Permission;

    /// Displays a notification and returns its id.
    async fn show_notification(&self, title: &str, options: Value) -> Result<u64, PlatformError>;

    /// Closing an already closed notification succeeds.
    async fn close_notification(&self, id: u64) -> Result<(), PlatformError>;

    async fn match_all_clients(&self, include_uncontrolled: bool) -> Result<Vec<WindowClient>, PlatformError>;

    async fn focus_client(&self, id: u64) -> Result<(), PlatformError>;

    async fn open_window(&self, url: &Url) -> Result<u64, PlatformError>;

    async fn skip_waiting(&self) -> Result<(), PlatformError>;

    async fn claim_clients(&self) -> Result<(), PlatformError>;
}

/// Executes a single effect against the platform.
pub async fn apply<P: Platform + ?Sized>(platform: &P, effect: Effect) -> Result<(), PlatformError> {
    match effect {
        Effect::None => Ok(()),
        Effect::ShowNotification { title, options } => {
            let id = platform.show_notification(&title, options).await?;
            debug!(id, %title, "notification shown");
            Ok(())
        }
        Effect::CloseNotification(id) => platform.close_notification(id).await,
        Effect::FocusClient(id) => platform.focus_client(id).await,
        Effect::OpenWindow(url) => platform.open_window(&url).await.map(|_| ()),
        Effect::SkipWaiting => platform.skip_waiting().await,
        Effect::ClaimClients => platform.claim_clients().await,
    }
}

#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Install,
    Activate,
    Push { data: Option<Vec<u8>> },
    NotificationClick(ClickEvent),
}

impl WorkerEvent {
    fn name(&self) -> &'static str {
        match self {
            WorkerEvent::Install => "install",
            WorkerEvent::Activate => "activate",
            WorkerEvent::Push { .. } => "push",
            WorkerEvent::NotificationClick(_) => "notificationclick",
        }
    }
}

/// An event whose lifetime is extended until every registered task settles.
#[derive(Debug, Default)]
pub struct ExtendableEvent {
    pending: Vec<JoinHandle<Result<(), WorkerError>>>,
}

impl ExtendableEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_until<F>(&mut self, task: F)
    where
        F: Future<Output = Result<(), WorkerError>> + Send + 'static,
    {
        self.pending.push(tokio::spawn(task));
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Waits for all tasks and reports the first failure.
    pub async fn settled(self) -> Result<(), WorkerError> {
        let mut outcome = Ok(());
        for handle in self.pending {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => Err(WorkerError::Task(err)),
            };
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    }
}

pub struct ServiceWorker<P> {
    platform: Arc<P>,
    scope: Url,
}

impl<P> Clone for ServiceWorker<P> {
    fn clone(&self) -> Self {
        Self {
            platform: Arc::clone(&self.platform),
            scope: self.scope.clone(),
        }
    }
}

impl<P: Platform + 'static> ServiceWorker<P> {
    pub fn new(platform: Arc<P>, scope: Url) -> Self {
        Self { platform, scope }
    }

    pub fn scope(&self) -> &Url {
        &self.scope
    }

    pub fn platform(&self) -> &Arc<P> {
        &self.platform
    }

    /// Registers the handler for `event` and hands back the extended event.
    pub fn dispatch(&self, event: WorkerEvent) -> ExtendableEvent {
        debug!(event = event.name(), "dispatching worker event");
        let mut extendable = ExtendableEvent::new();
        let platform = Arc::clone(&self.platform);
        match event {
            WorkerEvent::Install => extendable.wait_until(async move {
                apply(platform.as_ref(), Effect::SkipWaiting).await?;
                Ok::<(), WorkerError>(())
            }),
            WorkerEvent::Activate => extendable.wait_until(async move {
                apply(platform.as_ref(), Effect::ClaimClients).await?;
                info!("worker activated, clients claimed");
                Ok::<(), WorkerError>(())
            }),
            WorkerEvent::Push { data } => extendable.wait_until(async move {
                on_push(platform.as_ref(), data).await;
                Ok(())
            }),
            WorkerEvent::NotificationClick(click) => {
                let scope = self.scope.clone();
                extendable.wait_until(async move {
                    on_notification_click(platform.as_ref(), &scope, click)
                        .await
                        .map_err(|err| {
                            error!(%err, "notification click failed");
                            WorkerError::from(err)
                        })
                })
            }
        }
        extendable
    }

    /// Dispatches and waits for the event to settle.
    pub async fn handle(&self, event: WorkerEvent) -> Result<(), WorkerError> {
        self.dispatch(event).settled().await
    }
}

async fn on_push<P: Platform + ?Sized>(platform: &P, data: Option<Vec<u8>>) {
    let permission = platform.permission().await;
    let effect = handle_push(data.as_deref(), permission);
    if let Err(err) = apply(platform, effect).await {
        error!(%err, "failed to show notification");
    }
}

async fn on_notification_click<P: Platform + ?Sized>(
    platform: &P,
    scope: &Url,
    click: ClickEvent,
) -> Result<(), ClickError> {
    let Some(target) = resolve_navigation(&click.data, click.targeted_action())? else {
        debug!(id = click.notification_id, action = ?click.action, "no navigation target");
        return Ok(());
    };

    apply(platform, Effect::CloseNotification(click.notification_id)).await?;
    let url = absolute_target(scope, &target)?;
    let clients = platform.match_all_clients(true).await?;
    let effect = choose_destination(url, &clients);
    debug!(?effect, "navigating");
    apply(platform, effect).await?;
    Ok(())
}
