//! End-to-end navigation through the screens with synthetic key events.

mod common;

use carpool::navigation::Route;
use carpool::services::chat::{CONFIRMED_REPLY, GREETING_REPLY};
use common::{test_config, Harness};
use crossterm::event::KeyCode;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_login_drivers_chat_and_logout() {
    let mut h = Harness::new(test_config());
    assert_eq!(h.routes(), vec![Route::Login]);

    h.sign_in().await;
    assert_eq!(h.routes(), vec![Route::Profile]);
    assert!(h.render().contains("Ana Pérez"));

    // "Buscar conductores" has focus first
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Profile, Route::Drivers]);

    h.type_text("ped");
    let screen = h.render();
    assert!(screen.contains("Pedro Durán"));
    assert!(!screen.contains("Alice Smith"));

    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Profile, Route::Drivers, Route::Chat]);

    h.type_text("Hola");
    h.key(KeyCode::Enter);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(h.render().contains(GREETING_REPLY));

    h.type_text("quiero confirmar");
    h.key(KeyCode::Enter);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(h.render().contains(CONFIRMED_REPLY));
    assert!(!h.quit, "typing 'q' in the chat must not quit");

    h.key(KeyCode::Esc);
    assert_eq!(h.routes(), vec![Route::Profile, Route::Drivers]);
    h.key(KeyCode::Esc);
    assert_eq!(h.routes(), vec![Route::Profile]);

    // Profile is now the root
    h.key(KeyCode::Esc);
    assert_eq!(h.boundary_hits, 1);
    assert_eq!(h.routes(), vec![Route::Profile]);

    // Cerrar sesión is the third button
    h.key(KeyCode::Right);
    h.key(KeyCode::Right);
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Login]);
    assert!(h.services.auth.current_user().is_none());
}

#[tokio::test]
async fn test_wrong_password_stays_on_login() {
    let mut h = Harness::new(test_config());
    h.type_text(common::EMAIL);
    h.key(KeyCode::Tab);
    h.type_text("incorrecta");
    h.key(KeyCode::Enter);
    h.settle().await;

    assert_eq!(h.routes(), vec![Route::Login]);
    assert!(h.render().contains("Error al iniciar sesión"));
}

#[tokio::test]
async fn test_empty_login_shows_error_without_signing_in() {
    let mut h = Harness::new(test_config());
    h.key(KeyCode::Tab);
    h.key(KeyCode::Enter);
    h.settle().await;

    assert_eq!(h.routes(), vec![Route::Login]);
    assert!(h.render().contains("Error al iniciar sesión"));
    assert!(h.services.auth.current_user().is_none());
}

#[tokio::test]
async fn test_register_then_back_to_login() {
    let mut h = Harness::new(test_config());

    // Email, Contraseña, INICIAR SESIÓN, CREAR CUENTA
    for _ in 0..3 {
        h.key(KeyCode::Tab);
    }
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Login, Route::Register]);

    h.type_text("nuevo@ucc.edu.co");
    h.key(KeyCode::Tab);
    h.type_text("clave123");
    h.key(KeyCode::Tab);
    h.type_text("clave124");
    h.key(KeyCode::Enter);
    h.settle().await;
    assert!(h.render().contains("Las contraseñas no coinciden"));
    assert_eq!(h.routes(), vec![Route::Login, Route::Register]);

    h.key(KeyCode::Backspace);
    h.type_text("3");
    h.key(KeyCode::Enter);
    h.settle().await;

    // Replace keeps the login underneath
    assert_eq!(h.routes(), vec![Route::Login, Route::Login]);
    h.key(KeyCode::Esc);
    assert_eq!(h.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_register_back_button_pops() {
    let mut h = Harness::with_root(test_config(), Route::Login);
    h.key(KeyCode::BackTab);
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Login, Route::Register]);

    h.key(KeyCode::Esc);
    assert_eq!(h.routes(), vec![Route::Login]);
    assert_eq!(h.boundary_hits, 0);
}

#[tokio::test]
async fn test_bottom_bar_from_drivers() {
    let mut h = Harness::with_root(test_config(), Route::Drivers);
    h.key(KeyCode::F(2));
    assert_eq!(h.routes(), vec![Route::Drivers, Route::Map]);
    h.key(KeyCode::F(3));
    assert_eq!(h.routes(), vec![Route::Drivers, Route::Map, Route::Profile]);
    h.key(KeyCode::Esc);
    h.key(KeyCode::Esc);
    assert_eq!(h.routes(), vec![Route::Drivers]);
}

#[tokio::test(start_paused = true)]
async fn test_chat_follows_latest_reply_after_long_messages() {
    let mut h = Harness::with_root(test_config(), Route::Chat);
    let long = "x".repeat(300);

    for _ in 0..6 {
        h.type_text(&long);
        h.key(KeyCode::Enter);
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    h.type_text("hola");
    h.key(KeyCode::Enter);
    tokio::time::sleep(Duration::from_millis(150)).await;

    let screen = h.render();
    assert!(screen.contains("hola"));
    assert!(screen.contains(GREETING_REPLY));
}

#[tokio::test]
async fn test_create_account_ignored_while_signing_in() {
    let mut h = Harness::new(test_config());
    h.type_text(common::EMAIL);
    h.key(KeyCode::Tab);
    h.type_text(common::PASSWORD);
    h.key(KeyCode::Enter);

    // Focus "CREAR CUENTA" before the sign-in resolves
    h.key(KeyCode::Tab);
    h.key(KeyCode::Tab);
    h.key(KeyCode::Enter);
    assert_eq!(h.routes(), vec![Route::Login]);

    h.settle().await;
    assert_eq!(h.routes(), vec![Route::Profile]);
}
