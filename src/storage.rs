use crate::errors::AppError;
use crate::models::BrowserData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("PUSH_ROUTER_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/browser.json"))
}

pub async fn load_data(path: &Path) -> BrowserData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse browser state {}: {err}", path.display());
                BrowserData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BrowserData::default(),
        Err(err) => {
            error!("failed to read browser state {}: {err}", path.display());
            BrowserData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &BrowserData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
