use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer with `label: key | label: key` hints
pub struct Footer;

impl Footer {
    /// Render a `label: key | label: key` hint line
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let t = theme();
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);
    }

    /// Color the label and key halves of each hint
    pub fn hint_line(text: &str) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", label),
                    t.title_style(),
                ));
                spans.push(Span::styled(keys.to_string(), t.emphasis_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }
        Line::from(spans)
    }
}
