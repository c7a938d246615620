//! Semantic actions a key can be bound to.

use serde::{Deserialize, Serialize};

/// All user actions a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Lists and cursors
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Cursor to the start of the input
    Home,
    /// Cursor to the end of the input
    End,

    /// Press the focused button, open the selected row or submit the input
    Confirm,
    /// Pop the current screen
    Back,

    Quit,
    Help,
    /// Bottom bar "Home": push the map
    GoHome,
    /// Bottom bar "Favoritos": push the profile
    Favorites,

    /// Focus ring forward / backward across inputs and buttons
    NextField,
    PrevField,

    Backspace,
    DeleteChar,

    /// Chat history and driver list paging
    ScrollUp,
    ScrollDown,
}

impl Action {
    /// Text shown next to the key in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Subir",
            Action::MoveDown => "Bajar",
            Action::MoveLeft => "Cursor a la izquierda",
            Action::MoveRight => "Cursor a la derecha",
            Action::Home => "Inicio del texto",
            Action::End => "Final del texto",
            Action::Confirm => "Aceptar / enviar",
            Action::Back => "Pantalla anterior",
            Action::Quit => "Salir",
            Action::Help => "Mostrar atajos",
            Action::GoHome => "Abrir el mapa",
            Action::Favorites => "Abrir el perfil",
            Action::NextField => "Siguiente campo",
            Action::PrevField => "Campo anterior",
            Action::Backspace => "Borrar atrás",
            Action::DeleteChar => "Borrar carácter",
            Action::ScrollUp => "Historial arriba",
            Action::ScrollDown => "Historial abajo",
        }
    }

    /// Help overlay section
    pub fn category(&self) -> &'static str {
        match self {
            Action::GoHome | Action::Favorites | Action::Back => "Navegación",
            Action::Quit | Action::Help => "General",
            Action::Confirm | Action::NextField | Action::PrevField => "Formularios",
            Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::Backspace
            | Action::DeleteChar => "Edición",
            Action::MoveUp | Action::MoveDown | Action::ScrollUp | Action::ScrollDown => "Listas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_bar_actions_share_a_section() {
        assert_eq!(Action::GoHome.category(), "Navegación");
        assert_eq!(Action::Favorites.category(), Action::Back.category());
        assert_eq!(Action::GoHome.description(), "Abrir el mapa");
    }

    #[test]
    fn test_config_names_are_snake_case() {
        assert_eq!(serde_json::to_string(&Action::GoHome).unwrap(), "\"go_home\"");
        let parsed: Action = serde_json::from_str("\"next_field\"").unwrap();
        assert_eq!(parsed, Action::NextField);
    }
}
