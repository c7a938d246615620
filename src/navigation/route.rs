//! Routes and screen identifiers.

use anyhow::{anyhow, bail};
use std::fmt;
use std::str::FromStr;

/// Parameterless screen name.
///
/// Used for `pop_up_to` matching and for the screen catalogue; a `Route`
/// always maps to exactly one `ScreenId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    Register,
    Profile,
    Map,
    Route,
    Drivers,
    Chat,
}

impl ScreenId {
    /// Every screen, in catalogue order.
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Login,
        ScreenId::Register,
        ScreenId::Profile,
        ScreenId::Map,
        ScreenId::Route,
        ScreenId::Drivers,
        ScreenId::Chat,
    ];

    /// Path segment used when printing routes.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Register => "register",
            ScreenId::Profile => "profile",
            ScreenId::Map => "map",
            ScreenId::Route => "route",
            ScreenId::Drivers => "drivers",
            ScreenId::Chat => "chat",
        }
    }

    /// Route pattern including parameters.
    pub fn pattern(&self) -> &'static str {
        match self {
            ScreenId::Route => "route/{destination}",
            other => other.name(),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = anyhow::Error;

    /// Case-insensitive screen name, e.g. `Drivers`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ScreenId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("Unknown screen: {}", s))
    }
}

/// A navigable destination, carrying the parameters its screen needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Profile,
    Map,
    /// Route preview towards a free-text destination.
    Route { destination: String },
    Drivers,
    Chat,
}

impl Route {
    /// Route preview towards `destination`.
    pub fn route_to(destination: impl Into<String>) -> Self {
        Route::Route {
            destination: destination.into(),
        }
    }

    /// The screen this route opens
    pub fn screen_id(&self) -> ScreenId {
        match self {
            Route::Login => ScreenId::Login,
            Route::Register => ScreenId::Register,
            Route::Profile => ScreenId::Profile,
            Route::Map => ScreenId::Map,
            Route::Route { .. } => ScreenId::Route,
            Route::Drivers => ScreenId::Drivers,
            Route::Chat => ScreenId::Chat,
        }
    }

    /// Whether this route is an instance of `screen`.
    pub fn matches(&self, screen: ScreenId) -> bool {
        self.screen_id() == screen
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Route { destination } => write!(f, "route/{}", destination),
            other => f.write_str(other.screen_id().name()),
        }
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    /// Parse a route path such as `drivers` or `route/Andino`.
    ///
    /// The screen part is case-insensitive; the destination keeps its case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((screen, destination)) = s.split_once('/') {
            if screen.parse::<ScreenId>()? != ScreenId::Route {
                bail!("Screen {} takes no parameters", screen);
            }
            return Ok(Route::route_to(destination));
        }
        match s.parse::<ScreenId>()? {
            ScreenId::Login => Ok(Route::Login),
            ScreenId::Register => Ok(Route::Register),
            ScreenId::Profile => Ok(Route::Profile),
            ScreenId::Map => Ok(Route::Map),
            ScreenId::Route => Ok(Route::route_to("")),
            ScreenId::Drivers => Ok(Route::Drivers),
            ScreenId::Chat => Ok(Route::Chat),
        }
    }
}
