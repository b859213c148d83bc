#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use shortlinks::application::services::{LinkService, LinkSettings, UserService};
use shortlinks::domain::clock::{Clock, ManualClock};
use shortlinks::infrastructure::memory::{InMemoryLinkStore, InMemoryUserStore};
use shortlinks::infrastructure::remote_log::{LogEvent, LogSink, RemoteLogError};
use shortlinks::state::AppState;
use shortlinks::utils::code_generator::RandomShortcodeGenerator;

pub const BASE_URL: &str = "http://short.test";

/// Captures every emitted event on a channel.
pub struct RecordingSink(mpsc::UnboundedSender<LogEvent>);

#[async_trait]
impl LogSink for RecordingSink {
    async fn emit(&self, event: LogEvent) -> Result<(), RemoteLogError> {
        let _ = self.0.send(event);
        Ok(())
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn create_test_state() -> (
    AppState,
    Arc<ManualClock>,
    mpsc::UnboundedReceiver<LogEvent>,
) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let (tx, rx) = mpsc::unbounded_channel();

    let settings = LinkSettings {
        base_url: BASE_URL.to_string(),
        ..LinkSettings::default()
    };

    let link_service = Arc::new(LinkService::new(
        Arc::new(InMemoryLinkStore::new()),
        Arc::new(RandomShortcodeGenerator::default()),
        clock.clone() as Arc<dyn Clock>,
        settings,
    ));
    let user_service = Arc::new(UserService::new(
        Arc::new(InMemoryUserStore::new()),
        clock.clone() as Arc<dyn Clock>,
    ));

    let state = AppState::new(link_service, user_service, Arc::new(RecordingSink(tx)));

    (state, clock, rx)
}

/// Collects the events reported so far, waiting briefly for background sends.
pub async fn drain_events(rx: &mut mpsc::UnboundedReceiver<LogEvent>) -> Vec<LogEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await
    {
        events.push(event);
    }
    events
}
