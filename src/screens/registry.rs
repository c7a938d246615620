//! Route → screen construction and the screen catalogue.

use crate::navigation::{Route, ScreenId};
use crate::screens::{
    ChatScreen, DriversScreen, LoginScreen, MapScreen, ProfileScreen, RegisterScreen,
    RoutePreviewScreen, Screen,
};

/// Fresh screen state for `route`.
pub fn build_screen(route: &Route) -> Box<dyn Screen> {
    match route {
        Route::Login => Box::new(LoginScreen::new()),
        Route::Register => Box::new(RegisterScreen::new()),
        Route::Profile => Box::new(ProfileScreen::new()),
        Route::Map => Box::new(MapScreen::new()),
        Route::Route { destination } => Box::new(RoutePreviewScreen::new(destination.clone())),
        Route::Drivers => Box::new(DriversScreen::new()),
        Route::Chat => Box::new(ChatScreen::new()),
    }
}

/// One-line description used by `carpool routes`
pub fn describe(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Login => "Sign in with email and password (start screen)",
        ScreenId::Register => "Create an account",
        ScreenId::Profile => "Current user, favorites, find drivers, request service, sign out",
        ScreenId::Map => "Current location, destination search and nearby drivers",
        ScreenId::Route => "Route preview towards a destination with the assigned driver",
        ScreenId::Drivers => "Driver roster with name search",
        ScreenId::Chat => "Chat with a driver, answered by scripted replies",
    }
}

/// Screens reachable from `screen` and the intent that gets there
pub fn transitions(screen: ScreenId) -> &'static [(&'static str, &'static str)] {
    match screen {
        ScreenId::Login => &[("sign in", "replace profile"), ("create account", "push register")],
        ScreenId::Register => &[("back", "pop"), ("account created", "replace login")],
        ScreenId::Profile => &[
            ("find drivers", "push drivers"),
            ("request service", "push map"),
            ("sign out", "replace login"),
        ],
        ScreenId::Map => &[
            ("search", "push route/{destination}"),
            ("home", "push map"),
            ("favorites", "push profile"),
        ],
        ScreenId::Route => &[("cancel", "pop")],
        ScreenId::Drivers => &[
            ("open chat", "push chat"),
            ("home", "push map"),
            ("favorites", "push profile"),
        ],
        ScreenId::Chat => &[("home", "push map"), ("favorites", "push profile")],
    }
}
