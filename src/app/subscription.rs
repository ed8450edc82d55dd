// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop from here: the position watch stream
//! (keyed by the current [`WatchId`], so dropping the handle cancels it) and
//! a poll of the system dark-mode preference, active only while the user has
//! never chosen a theme explicitly.

use super::Message;
use crate::config::defaults;
use crate::geolocation::{GeolocationProvider, WatchId, WatchOptions};
use crate::ui::theming::ThemeMode;
use futures_util::StreamExt;
use iced::futures::SinkExt;
use iced::{stream, time, Subscription};
use std::sync::Arc;
use std::time::Duration;

/// Identity and capture bundle for the watch stream. Hashing only the watch
/// id keeps the subscription keyed by [`WatchId`], as before.
struct WatchStream {
    id: WatchId,
    provider: Arc<dyn GeolocationProvider>,
}

impl std::hash::Hash for WatchStream {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Forwards the provider's watch stream into the update loop while a watch is
/// active. The subscription identity is the watch id: a new session replaces
/// the stream, and clearing the handle tears it down.
pub fn watch_subscription(
    provider: Arc<dyn GeolocationProvider>,
    watch: Option<WatchId>,
) -> Subscription<Message> {
    let Some(id) = watch else {
        return Subscription::none();
    };

    Subscription::run_with(WatchStream { id, provider }, |data| {
        let id = data.id;
        let provider = Arc::clone(&data.provider);
        stream::channel(
            100,
            move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let mut fixes = provider.watch(WatchOptions::default());
                while let Some(item) = fixes.next().await {
                    if output.send(Message::Watch(id, item)).await.is_err() {
                        break;
                    }
                }
                // The source ended; park so the runtime does not respawn it.
                std::future::pending::<()>().await;
            },
        )
    })
}

/// Polls the system dark-mode preference. The update loop ignores repeats, so
/// emitting the current mode every tick is enough to track changes.
pub fn system_theme_subscription(enabled: bool) -> Subscription<Message> {
    if enabled {
        time::every(Duration::from_millis(defaults::SYSTEM_THEME_POLL_MS))
            .map(|_| Message::SystemThemeChanged(ThemeMode::system()))
    } else {
        Subscription::none()
    }
}
