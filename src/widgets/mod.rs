// Reusable UI widgets

pub mod map_view;
pub mod text_input;
pub mod toast;

pub use map_view::{MapView, MapWidget};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant};
