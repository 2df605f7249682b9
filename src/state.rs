use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::sheets::RecordStore;

pub type SharedState = Arc<AppState>;

/// Process-wide handles, built once at startup and read-only afterwards.
pub struct AppState {
    pub config: Config,
    /// `None` when the store could not be reached at startup.
    pub store: Option<Arc<dyn RecordStore>>,
    pub notifier: Arc<dyn Notifier>,
}
