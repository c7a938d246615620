//! Driver roster.

use crate::config::DriverEntry;

/// A driver as listed on the drivers screen
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub status: String,
    pub online: bool,
    /// 0.0 to 5.0
    pub rating: f32,
}

impl Driver {
    pub fn new(name: &str, status: &str, online: bool, rating: f32) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
            online,
            rating: rating.clamp(0.0, 5.0),
        }
    }

    /// One star per whole rating point, drawn from a four-full-one-empty strip
    pub fn stars(&self) -> String {
        "★★★★☆".chars().take(self.rating as usize).collect()
    }
}

impl From<&DriverEntry> for Driver {
    fn from(entry: &DriverEntry) -> Self {
        Self::new(&entry.name, &entry.status, entry.online, entry.rating)
    }
}

/// Mock roster used when the config has no `[[drivers]]`
pub fn default_roster() -> Vec<Driver> {
    vec![
        Driver::new("Alice Smith", "En línea", true, 4.5),
        Driver::new("Carlos Torres", "Fuera de línea", false, 4.7),
        Driver::new("Alejandro G...", "En línea", true, 4.2),
        Driver::new("Santiago Ve...", "Fuera de línea", false, 4.8),
        Driver::new("Sebastian A...", "Fuera de línea", false, 4.3),
        Driver::new("Pedro Durán", "En línea", true, 4.6),
    ]
}

/// Drivers listed under "Conductores Disponibles" on the map
pub const AVAILABLE_NEARBY: [&str; 3] = ["Alice Smith", "Alejandro García", "Pedro Durán"];

/// The roster the drivers screen searches
#[derive(Debug, Clone)]
pub struct DriverDirectory {
    drivers: Vec<Driver>,
}

impl DriverDirectory {
    /// Configured drivers, or the built-in roster when none are given
    pub fn new(entries: &[DriverEntry]) -> Self {
        let drivers = if entries.is_empty() {
            default_roster()
        } else {
            entries.iter().map(Driver::from).collect()
        };
        Self { drivers }
    }

    pub fn all(&self) -> &[Driver] {
        &self.drivers
    }

    /// Case-insensitive name filter; a blank query keeps everyone
    pub fn search(&self, query: &str) -> Vec<Driver> {
        let query = query.trim().to_lowercase();
        self.drivers
            .iter()
            .filter(|driver| query.is_empty() || driver.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl Default for DriverDirectory {
    fn default() -> Self {
        Self::new(&[])
    }
}
