//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::DataSettings;
use crate::message::Message;
use crate::source::{AvatarSource, DataSource};
use crate::state::RequestId;
use crate::UpdateAction;

/// Everything a background load needs, shared across retries
#[derive(Debug, Clone)]
pub struct AvatarLoader {
    source: Arc<DataSource>,
    delay: Duration,
}

impl AvatarLoader {
    pub fn new(source: DataSource, delay: Duration) -> Self {
        Self {
            source: Arc::new(source),
            delay,
        }
    }

    pub fn from_settings(settings: &DataSettings) -> Self {
        Self::new(
            DataSource::from_settings(settings),
            Duration::from_millis(settings.delay_ms),
        )
    }

    pub fn describe(&self) -> String {
        AvatarSource::describe(self.source.as_ref())
    }
}

/// Run one load attempt and turn its outcome into a message
pub async fn load_avatars(loader: &AvatarLoader, request: RequestId) -> Message {
    if !loader.delay.is_zero() {
        tokio::time::sleep(loader.delay).await;
    }

    match AvatarSource::fetch(loader.source.as_ref()).await {
        Ok(avatars) => {
            info!(
                "Loaded {} avatars from {}",
                avatars.len(),
                loader.describe()
            );
            Message::AvatarsLoaded { request, avatars }
        }
        // Name the source so the banner says which file failed
        Err(e) => Message::AvatarsLoadFailed {
            request,
            reason: format!("{}: {}", loader.describe(), e),
        },
    }
}

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, loader: &AvatarLoader) {
    match action {
        UpdateAction::LoadAvatars { request } => {
            let loader = loader.clone();
            tokio::spawn(async move {
                let msg = load_avatars(&loader, request).await;
                // Receiver gone means the dashboard already shut down
                if msg_tx.send(msg).await.is_err() {
                    debug!("Dropping load result {:?}: channel closed", request);
                }
            });
        }
    }
}
