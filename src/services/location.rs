//! Location acquisition.
//!
//! The map screen starts [`LocationService::start`] when it is entered. The
//! background task asks for permission, then reports the cached fix if there
//! is one and otherwise follows the provider's update stream. Outcomes arrive
//! on a channel that the screen drains from its tick; dropping the
//! [`LocationHandle`] stops the task.

use crate::config::LocationConfig;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {}, Lon: {}", self.latitude, self.longitude)
    }
}

/// Answer to a location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of device positions.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    /// The cached fix, if the provider has one
    async fn last_known_position(&self) -> Result<Option<Position>>;

    /// Start streaming fixes. The stream ends when the receiver is dropped.
    async fn subscribe(&self) -> Result<mpsc::Receiver<Position>>;
}

/// Provider driven entirely by the `[location]` config section.
pub struct SimulatedLocationProvider {
    permission_granted: bool,
    last_known: Option<Position>,
    track: Vec<Position>,
    interval: Duration,
}

impl SimulatedLocationProvider {
    /// Provider replaying the configured permission, fix and track
    pub fn new(config: &LocationConfig) -> Self {
        Self {
            permission_granted: config.permission_granted,
            last_known: config.last_known,
            track: config.track.clone(),
            interval: Duration::from_millis(config.update_interval_ms.max(1)),
        }
    }
}

#[async_trait]
impl LocationProvider for SimulatedLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn last_known_position(&self) -> Result<Option<Position>> {
        Ok(self.last_known)
    }

    async fn subscribe(&self) -> Result<mpsc::Receiver<Position>> {
        let (tx, rx) = mpsc::channel(4);
        let track = self.track.clone();
        let interval = self.interval;
        tokio::spawn(async move {
            // Replays the track, then stops
            for position in track {
                if tx.send(position).await.is_err() {
                    return;
                }
                tokio::time::sleep(interval).await;
            }
        });
        Ok(rx)
    }
}

/// What the map screen shows for the current location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    PermissionDenied,
    Fix(Position),
    Unavailable(String),
}

/// Receiving end of a running location task.
pub struct LocationHandle {
    receiver: mpsc::UnboundedReceiver<LocationUpdate>,
}

impl LocationHandle {
    /// Drain everything that arrived since the last call; the latest wins.
    pub fn try_latest(&mut self) -> Option<LocationUpdate> {
        let mut latest = None;
        while let Ok(update) = self.receiver.try_recv() {
            latest = Some(update);
        }
        latest
    }
}

/// Runs the location flow in the background
pub struct LocationService;

impl LocationService {
    /// Spawn the permission → last fix → updates flow on `runtime`.
    pub fn start(
        runtime: &Handle,
        provider: std::sync::Arc<dyn LocationProvider>,
    ) -> LocationHandle {
        let (tx, receiver) = mpsc::unbounded_channel();
        runtime.spawn(async move {
            tokio::select! {
                () = Self::run(provider.as_ref(), &tx) => {}
                () = tx.closed() => debug!("Location receiver dropped, stopping"),
            }
        });
        LocationHandle { receiver }
    }

    async fn run(provider: &dyn LocationProvider, tx: &mpsc::UnboundedSender<LocationUpdate>) {
        if provider.request_permission().await == PermissionStatus::Denied {
            info!("Location permission denied");
            let _ = tx.send(LocationUpdate::PermissionDenied);
            return;
        }

        match provider.last_known_position().await {
            Ok(Some(position)) => {
                debug!("Using last known position {}", position);
                let _ = tx.send(LocationUpdate::Fix(position));
                return;
            }
            Ok(None) => debug!("No cached position, subscribing to updates"),
            Err(e) => {
                warn!("Failed to read last known position: {:#}", e);
                let _ = tx.send(LocationUpdate::Unavailable(e.to_string()));
                return;
            }
        }

        let mut updates = match provider.subscribe().await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("Failed to subscribe to location updates: {:#}", e);
                let _ = tx.send(LocationUpdate::Unavailable(e.to_string()));
                return;
            }
        };
        while let Some(position) = updates.recv().await {
            debug!("Location update {}", position);
            if tx.send(LocationUpdate::Fix(position)).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn provider(
        permission_granted: bool,
        last_known: Option<Position>,
        track: Vec<Position>,
    ) -> Arc<dyn LocationProvider> {
        Arc::new(SimulatedLocationProvider::new(&LocationConfig {
            permission_granted,
            update_interval_ms: 10,
            last_known,
            track,
        }))
    }

    async fn collect(mut handle: LocationHandle) -> Vec<LocationUpdate> {
        let mut out = Vec::new();
        while let Some(update) = handle.receiver.recv().await {
            out.push(update);
        }
        out
    }

    #[test]
    fn test_position_display() {
        assert_eq!(
            Position::new(4.5, -74.25).to_string(),
            "Lat: 4.5, Lon: -74.25"
        );
    }

    #[tokio::test]
    async fn test_denied_permission_reports_denial_only() {
        let handle = LocationService::start(&Handle::current(), provider(false, None, vec![]));
        assert_eq!(collect(handle).await, vec![LocationUpdate::PermissionDenied]);
    }

    #[tokio::test]
    async fn test_cached_fix_skips_updates() {
        let cached = Position::new(4.6, -74.1);
        let handle = LocationService::start(
            &Handle::current(),
            provider(true, Some(cached), vec![Position::new(1.0, 1.0)]),
        );
        assert_eq!(collect(handle).await, vec![LocationUpdate::Fix(cached)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_updates_stream_in_order() {
        let track = vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)];
        let handle = LocationService::start(&Handle::current(), provider(true, None, track.clone()));
        let updates = collect(handle).await;
        assert_eq!(
            updates,
            track.into_iter().map(LocationUpdate::Fix).collect::<Vec<_>>()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_latest_keeps_last_arrival() {
        let track = vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)];
        let mut handle =
            LocationService::start(&Handle::current(), provider(true, None, track));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            handle.try_latest(),
            Some(LocationUpdate::Fix(Position::new(3.0, 4.0)))
        );
        assert_eq!(handle.try_latest(), None);
    }
}
