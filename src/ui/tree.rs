//! Collapsible tree widget for an [`InspectorView`]
//!
//! [`TreeState`] owns everything that changes while the user browses: the expanded
//! set, the selected row and the scroll offset. It is seeded from the view's
//! default-expanded paths and reset by [`TreeState::sync`] whenever the view's
//! remount key changes. [`render_tree`] draws the visible rows into a bordered list.

use super::theme::{Theme, SWATCH_BORDER_LIGHTEN};
use crate::color::{lighten, parse_css_color};
use crate::inspect::{InspectorView, Node, NodePath};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rustc_hash::FxHashSet;

const EXPAND_ICON: &str = "▸ ";
const COLLAPSE_ICON: &str = "▾ ";
const END_ICON: &str = "  ";
const INDENT: &str = "  ";

/// A node as it appears in the flattened list of visible rows
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<'a> {
    pub node: &'a Node,
    pub depth: usize,
    pub expanded: bool,
    /// Index of the parent row, if any
    pub parent: Option<usize>,
}

/// Expansion and selection state of the tree widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeState {
    expanded: FxHashSet<NodePath>,
    selected: usize,
    offset: usize,
    remount_key: String,
}

impl TreeState {
    pub fn new(view: &InspectorView) -> Self {
        TreeState {
            expanded: view.default_expanded.paths().iter().cloned().collect(),
            selected: 0,
            offset: 0,
            remount_key: view.remount_key.clone(),
        }
    }

    /// Adopt a new view. Returns true when the remount key changed and the
    /// expansion state was reset to the view's defaults.
    pub fn sync(&mut self, view: &InspectorView) -> bool {
        if self.remount_key == view.remount_key {
            let rows = visible_rows(view, self);
            self.clamp_selection(rows.len());
            return false;
        }
        log::debug!(
            "remount key changed ({:?} -> {:?}), resetting tree",
            self.remount_key,
            view.remount_key
        );
        *self = TreeState::new(view);
        true
    }

    pub fn is_expanded(&self, id: &NodePath) -> bool {
        self.expanded.contains(id)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn expand(&mut self, id: &NodePath) {
        self.expanded.insert(id.clone());
    }

    pub fn collapse(&mut self, id: &NodePath) {
        self.expanded.remove(id);
    }

    pub fn toggle(&mut self, id: &NodePath) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Expand every expandable node in the view
    pub fn expand_all(&mut self, view: &InspectorView) {
        fn walk(nodes: &[Node], expanded: &mut FxHashSet<NodePath>) {
            for node in nodes {
                if node.is_expandable() {
                    expanded.insert(node.id.clone());
                    walk(&node.children, expanded);
                }
            }
        }
        walk(&view.nodes, &mut self.expanded);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.selected = 0;
        self.offset = 0;
    }

    /// Path of the selected node
    pub fn selected_path(&self, view: &InspectorView) -> Option<NodePath> {
        visible_rows(view, self)
            .get(self.selected)
            .map(|row| row.node.id.clone())
    }

    pub fn select_next(&mut self, view: &InspectorView) {
        let count = visible_rows(view, self).len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, view: &InspectorView) {
        self.selected = visible_rows(view, self).len().saturating_sub(1);
    }

    /// Expand the selected node, or step into its first child if already open
    pub fn expand_selected(&mut self, view: &InspectorView) {
        let rows = visible_rows(view, self);
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        if !row.node.is_expandable() {
            return;
        }
        if row.expanded {
            self.selected += 1;
        } else {
            let id = row.node.id.clone();
            self.expand(&id);
        }
    }

    /// Collapse the selected node, or step out to its parent if it is closed
    pub fn collapse_selected(&mut self, view: &InspectorView) {
        let rows = visible_rows(view, self);
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        if row.expanded {
            let id = row.node.id.clone();
            self.collapse(&id);
        } else if let Some(parent) = row.parent {
            self.selected = parent;
        }
    }

    pub fn toggle_selected(&mut self, view: &InspectorView) {
        let rows = visible_rows(view, self);
        if let Some(row) = rows.get(self.selected) {
            if row.node.is_expandable() {
                let id = row.node.id.clone();
                self.toggle(&id);
            }
        }
    }

    fn clamp_selection(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    /// Keep the selection inside a window of `height` rows
    fn scroll_to_selection(&mut self, height: usize) {
        let height = height.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }
}

/// Flatten the rows currently visible under `state`
pub fn visible_rows<'a>(view: &'a InspectorView, state: &TreeState) -> Vec<VisibleRow<'a>> {
    fn walk<'a>(
        nodes: &'a [Node],
        depth: usize,
        parent: Option<usize>,
        state: &TreeState,
        rows: &mut Vec<VisibleRow<'a>>,
    ) {
        for node in nodes {
            let expanded = node.is_expandable() && state.is_expanded(&node.id);
            let index = rows.len();
            rows.push(VisibleRow {
                node,
                depth,
                expanded,
                parent,
            });
            if expanded {
                walk(&node.children, depth + 1, Some(index), state, rows);
            }
        }
    }

    let mut rows = Vec::new();
    walk(&view.nodes, 0, None, state, &mut rows);
    rows
}

/// Styled spans for one row: indent, icon, optional swatch, key and label
pub fn row_spans(row: &VisibleRow<'_>, theme: &Theme) -> Vec<Span<'static>> {
    let node = row.node;
    let icon = if !node.is_expandable() {
        END_ICON
    } else if row.expanded {
        COLLAPSE_ICON
    } else {
        EXPAND_ICON
    };

    let mut spans = vec![
        Span::raw(INDENT.repeat(row.depth)),
        Span::styled(icon, Style::default().fg(theme.icon)),
    ];

    if let Some(key) = &node.key {
        spans.push(Span::styled(
            format!("{}: ", key),
            Style::default().fg(theme.fg),
        ));
    }

    if let Some(swatch) = &node.swatch {
        // Unparseable colors still get a swatch, drawn in the foreground color
        let fill = parse_css_color(&swatch.css).map_or(theme.fg, Into::into);
        let border = lighten(&swatch.css, SWATCH_BORDER_LIGHTEN).map_or(theme.icon, Into::into);
        spans.push(Span::styled("[", Style::default().fg(border)));
        spans.push(Span::styled("■", Style::default().fg(fill)));
        spans.push(Span::styled("] ", Style::default().fg(border)));
    }

    spans.push(Span::styled(
        node.label.clone(),
        Style::default().fg(theme.token_color(node.style)),
    ));
    spans
}

/// Render the inspector tree
pub fn render_tree(
    frame: &mut Frame,
    area: Rect,
    view: &InspectorView,
    state: &mut TreeState,
    is_focused: bool,
) {
    let theme = Theme::for_mode(view.palette_mode);

    let border_style = if is_focused {
        Style::default()
            .fg(theme.focus_outline)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.icon)
    };

    let block = Block::default()
        .title(format!(" {} ", view.root))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    let rows = visible_rows(view, state);
    let visible_height = area.height.saturating_sub(2) as usize; // borders

    if rows.is_empty() {
        let empty = ListItem::new("(empty)").style(Style::default().fg(theme.comment));
        frame.render_widget(List::new(vec![empty]).block(block), area);
        return;
    }

    state.clamp_selection(rows.len());
    state.scroll_to_selection(visible_height);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(state.offset)
        .take(visible_height.max(1))
        .map(|(index, row)| {
            let item = ListItem::new(Line::from(row_spans(row, theme)));
            if index == state.selected && is_focused {
                item.style(Style::default().bg(theme.selection_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
