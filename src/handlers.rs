use crate::click::ClickEvent;
use crate::errors::AppError;
use crate::models::{
    BrowserData, ClickRequest, Notification, OpenWindowRequest, PermissionRequest, PushMessage,
};
use crate::navigation::resolve_target;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_index, DEFAULT_NOTIFICATION};
use crate::worker::{Platform, WorkerEvent};
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.worker.scope().as_str(), DEFAULT_NOTIFICATION))
}

pub async fn get_browser(State(state): State<AppState>) -> Json<BrowserData> {
    Json(state.browser().snapshot().await)
}

/// Delivers the raw request body as a push message.
pub async fn push(State(state): State<AppState>, body: Bytes) -> Result<Json<BrowserData>, AppError> {
    let data = if body.is_empty() { None } else { Some(body.to_vec()) };
    deliver(&state, data).await
}

/// Wraps a notification the way the server side does and delivers it.
pub async fn send(
    State(state): State<AppState>,
    Json(notification): Json<Notification>,
) -> Result<Json<BrowserData>, AppError> {
    let payload = PushMessage::from(notification)
        .to_bytes()
        .map_err(AppError::internal)?;
    deliver(&state, Some(payload)).await
}

pub async fn click_notification(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<ClickRequest>,
) -> Result<Json<BrowserData>, AppError> {
    let notification = state
        .browser()
        .notification(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("notification {id} not found")))?;

    if !notification.open {
        return Err(AppError::conflict(format!("notification {id} is closed")));
    }

    info!(id, action = ?payload.action, "notification clicked");
    let outcome = state
        .worker
        .handle(WorkerEvent::NotificationClick(ClickEvent {
            notification_id: id,
            data: notification.data,
            action: payload.action,
        }))
        .await;

    // The click may have closed the notification before failing.
    let snapshot = save(&state).await?;
    outcome?;
    Ok(snapshot)
}

pub async fn open_window(
    State(state): State<AppState>,
    Json(payload): Json<OpenWindowRequest>,
) -> Result<Json<BrowserData>, AppError> {
    let url = resolve_target(state.worker.scope(), payload.url.trim())
        .map_err(|err| AppError::bad_request(format!("invalid url: {err}")))?;
    state
        .browser()
        .open_window(&url)
        .await
        .map_err(AppError::internal)?;
    save(&state).await
}

pub async fn set_permission(
    State(state): State<AppState>,
    Json(payload): Json<PermissionRequest>,
) -> Result<Json<BrowserData>, AppError> {
    state.browser().set_permission(payload.permission).await;
    save(&state).await
}

async fn deliver(state: &AppState, data: Option<Vec<u8>>) -> Result<Json<BrowserData>, AppError> {
    state.worker.handle(WorkerEvent::Push { data }).await?;
    save(state).await
}

async fn save(state: &AppState) -> Result<Json<BrowserData>, AppError> {
    let snapshot = state.browser().snapshot().await;
    persist_data(&state.data_path, &snapshot).await?;
    Ok(Json(snapshot))
}
