pub mod focus;
pub mod layout;
pub mod list_navigation;
pub mod path;
pub mod text_input;

pub use focus::FocusRing;
pub use layout::{center_popup, centered_column, screen_layout};
pub use list_navigation::ListStateExt;
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::TextInput;
