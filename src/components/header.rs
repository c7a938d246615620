use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// App name shown on the left of every header
pub const BRAND: &str = "Carpooling UCC";

/// Common header: brand on the left, screen title and subtitle on the right
pub struct Header;

impl Header {
    /// Render the screen title with an optional subtitle on the right
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [brand_area, title_area] =
            Layout::horizontal([Constraint::Length(BRAND.len() as u16 + 4), Constraint::Min(0)])
                .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("◆ ", t.accent_style()),
                Span::styled(BRAND, t.title_style()),
            ])),
            brand_area,
        );

        let mut spans = vec![Span::styled(title.to_string(), t.emphasis_style())];
        if !subtitle.is_empty() {
            spans.push(Span::styled(format!("  {}", subtitle), t.muted_style()));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            title_area,
        );
    }
}
