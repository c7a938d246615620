pub mod buttons;
pub mod footer;
pub mod header;
pub mod help_overlay;

pub use buttons::button_line;
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
