//! Help Overlay Component
//!
//! Lists the active keybindings, grouped by category, over the current screen.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const PRESETS: [KeymapPreset; 3] = [
    KeymapPreset::Standard,
    KeymapPreset::Vim,
    KeymapPreset::Emacs,
];

/// Keybinding overlay opened with the help key
pub struct HelpOverlay;

impl HelpOverlay {
    /// Preset picked by pressing 1/2/3 while the overlay is open
    pub fn preset_for_digit(c: char) -> Option<KeymapPreset> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        PRESETS.get(index).copied()
    }

    /// Bindings grouped by category, categories in first-seen order
    pub fn grouped_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();

        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                t.accent_style().add_modifier(Modifier::BOLD),
            )));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }

    /// Draw the overlay centered over `area`
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup_area = center_popup(area, 90, 90);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Atajos de teclado - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .areas(inner_area);

        let mut preset_spans = vec![Span::styled("Preset: ", t.muted_style())];
        for (i, preset) in PRESETS.iter().enumerate() {
            let label = format!("{} {}  ", i + 1, preset.name());
            let style = if *preset == keymap.preset {
                t.title_style()
            } else {
                t.muted_style()
            };
            preset_spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(preset_spans)), preset_area);

        frame.render_widget(
            Paragraph::new(Self::grouped_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer_text = format!(
            "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_for_digit() {
        assert_eq!(HelpOverlay::preset_for_digit('1'), Some(KeymapPreset::Standard));
        assert_eq!(HelpOverlay::preset_for_digit('3'), Some(KeymapPreset::Emacs));
        assert_eq!(HelpOverlay::preset_for_digit('0'), None);
        assert_eq!(HelpOverlay::preset_for_digit('4'), None);
        assert_eq!(HelpOverlay::preset_for_digit('x'), None);
    }

    #[test]
    fn test_each_category_listed_once() {
        let lines = HelpOverlay::grouped_lines(&Keymap::default());
        let headers = lines
            .iter()
            .filter(|line| {
                line.spans.len() == 1 && line.spans[0].content.trim() == "Navegación"
            })
            .count();
        assert_eq!(headers, 1);
    }
}
