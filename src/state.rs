use crate::browser::SimulatedBrowser;
use crate::models::BrowserData;
use crate::worker::ServiceWorker;
use std::{path::PathBuf, sync::Arc};
use url::Url;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub worker: ServiceWorker<SimulatedBrowser>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: BrowserData, scope: Url) -> Self {
        Self {
            data_path,
            worker: ServiceWorker::new(Arc::new(SimulatedBrowser::new(data)), scope),
        }
    }

    pub fn browser(&self) -> &SimulatedBrowser {
        self.worker.platform()
    }
}
