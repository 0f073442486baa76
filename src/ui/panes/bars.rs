//! Bar chart pane: one bar per array value with highlight colors

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Highlight color for one bar. Indices in the highlight sets that fall
/// outside the drawn range are silently ignored here, at the renderer
/// boundary.
fn bar_style(snapshot: &Snapshot<u32>, idx: usize) -> Style {
    if snapshot.active.contains(&idx) {
        Style::default().fg(DEFAULT_THEME.active)
    } else if snapshot.sorted.contains(&idx) {
        Style::default().fg(DEFAULT_THEME.sorted)
    } else {
        Style::default().fg(DEFAULT_THEME.bar)
    }
}

/// Render the bar pane. The title carries the algorithm name and the
/// current step label, if any.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot<u32>, algorithm: &str) {
    let title = match &snapshot.label {
        Some(label) => format!(" {}: {} ", algorithm, label),
        None => format!(" {} ", algorithm),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let n = snapshot.values.len() as u16;
    let inner_width = area.width.saturating_sub(2);

    // fit all bars into the pane: drop the gap first, then shrink the bars
    let bar_gap: u16 = if n > 0 && inner_width / n >= 2 { 1 } else { 0 };
    let bar_width: u16 = if n == 0 {
        1
    } else {
        (inner_width.saturating_sub(n.saturating_sub(1) * bar_gap) / n).max(1)
    };

    let bars: Vec<Bar> = snapshot
        .values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            Bar::default()
                .value(u64::from(value))
                .text_value(String::new())
                .style(bar_style(snapshot, idx))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
