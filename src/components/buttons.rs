use crate::styles::theme;
use ratatui::text::{Line, Span};

/// A row of `[ LABEL ]` buttons with the focused one highlighted
pub fn button_line(labels: &[&str], focused: Option<usize>) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[ {} ]", label),
            t.button_style(focused == Some(i)),
        ));
    }
    Line::from(spans)
}
