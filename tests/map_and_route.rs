//! Map screen location flow and the route preview it opens.

mod common;

use carpool::navigation::Route;
use carpool::services::Position;
use common::{test_config, Harness};
use crossterm::event::KeyCode;

#[tokio::test]
async fn test_permission_denied_shows_status() {
    let mut config = test_config();
    config.location.permission_granted = false;
    let mut h = Harness::with_root(config, Route::Map);
    assert!(h.render().contains("Obteniendo ubicación..."));

    h.settle().await;
    assert!(h.render().contains("Permiso de ubicación denegado"));
}

#[tokio::test]
async fn test_last_known_position_is_shown() {
    let mut config = test_config();
    config.location.last_known = Some(Position::new(4.6, -74.1));
    let mut h = Harness::with_root(config, Route::Map);

    h.settle().await;
    assert!(h.render().contains("Lat: 4.6, Lon: -74.1"));
}

#[tokio::test(start_paused = true)]
async fn test_track_updates_keep_latest_fix() {
    let mut config = test_config();
    config.location.track = vec![Position::new(4.1, -74.1), Position::new(4.2, -74.2)];
    config.location.update_interval_ms = 50;
    let mut h = Harness::with_root(config, Route::Map);

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    h.settle().await;
    assert!(h.render().contains("Lat: 4.2, Lon: -74.2"));
}

#[tokio::test]
async fn test_search_opens_route_preview() {
    let mut h = Harness::with_root(test_config(), Route::Map);

    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Map]);
    assert_eq!(h.toasts.len(), 1);

    h.type_text("  Andino ");
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Map, Route::route_to("Andino")]);

    let screen = h.render();
    assert!(screen.contains("Andino"));
    assert!(screen.contains("Bryan Rincón"));
    assert!(screen.contains("PRECIO $7,500"));

    // Cancelar has focus
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Map]);
}

#[tokio::test]
async fn test_confirm_route_shows_toast() {
    let mut h = Harness::with_root(test_config(), Route::route_to("Andino"));
    h.key(KeyCode::Right);
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::route_to("Andino")]);
    assert_eq!(h.toasts.len(), 1);
}
