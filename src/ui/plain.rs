//! Plain-text rendering of an inspector tree, for non-interactive output

use super::tree::{row_spans, visible_rows, TreeState};
use super::theme::Theme;
use crate::inspect::InspectorView;

/// Which nodes a plain rendering includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainMode {
    /// Every node, fully expanded
    All,
    /// Only nodes reachable through the view's default-expanded paths
    DefaultExpanded,
}

/// Render the tree as one line per visible node, without colors
pub fn render_plain(view: &InspectorView, mode: PlainMode) -> String {
    let mut state = TreeState::new(view);
    if mode == PlainMode::All {
        state.expand_all(view);
    }

    let theme = Theme::for_mode(view.palette_mode);
    let mut out = String::new();
    for row in visible_rows(view, &state) {
        let line: String = row_spans(&row, theme)
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
