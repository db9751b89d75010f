//! Main TUI application state and logic

use super::status::{render_status_bar, StatusRenderData};
use super::tree::{render_tree, visible_rows, TreeState};
use crate::inspect::{inspect, InspectOptions, InspectorView};
use crate::value::Value;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The value being inspected
    pub data: Value,

    /// Options the current view was built with
    pub options: InspectOptions,

    /// Inspector tree for `data` under `options`
    pub view: InspectorView,

    /// Expansion and selection state of the tree
    pub tree: TreeState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app inspecting `data`
    pub fn new(data: Value, options: InspectOptions) -> Self {
        let view = inspect(&data, &options);
        let tree = TreeState::new(&view);
        let status_message = format!("{} node(s)", view.node_count());
        App {
            data,
            options,
            view,
            tree,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Replace the expand paths and rebuild. The tree resets when the paths change.
    pub fn set_expand_paths(&mut self, paths: Option<Vec<String>>) {
        self.options.expand_paths = paths;
        self.rebuild();
    }

    /// Rebuild the view after `data` or `options` changed
    pub fn rebuild(&mut self) {
        self.view = inspect(&self.data, &self.options);
        if self.tree.sync(&self.view) {
            self.status_message = "Expansion reset".to_string();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        render_tree(frame, chunks[0], &self.view, &mut self.tree, true);

        let selected = self.tree.selected_path(&self.view);
        let total_rows = visible_rows(&self.view, &self.tree).len();
        render_status_bar(
            frame,
            chunks[1],
            StatusRenderData {
                message: &self.status_message,
                selected_path: selected.as_ref().map(|p| p.as_str()),
                row: self.tree.selected(),
                total_rows,
                palette_mode: self.view.palette_mode,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.tree.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.tree.select_next(&self.view),
            KeyCode::Right | KeyCode::Char('l') => self.tree.expand_selected(&self.view),
            KeyCode::Left | KeyCode::Char('h') => self.tree.collapse_selected(&self.view),
            KeyCode::Enter | KeyCode::Char(' ') => self.tree.toggle_selected(&self.view),
            KeyCode::Home => self.tree.select_first(),
            KeyCode::End => self.tree.select_last(&self.view),
            KeyCode::Char('e') => {
                self.tree.expand_all(&self.view);
                self.status_message = "Expanded all".to_string();
            }
            KeyCode::Char('c') => {
                self.tree.collapse_all();
                self.status_message = "Collapsed all".to_string();
            }
            KeyCode::Char('r') => {
                self.tree = TreeState::new(&self.view);
                self.status_message = "Expansion reset".to_string();
            }
            KeyCode::Char('t') => {
                self.options.palette_mode = self.options.palette_mode.toggled();
                self.rebuild();
                self.status_message = format!("Theme: {}", self.options.palette_mode);
            }
            _ => {}
        }
    }
}

/// Mutes the `log` facade while the alternate screen is active.
///
/// Log output goes to stderr, which shares the terminal with the TUI. The previous
/// maximum level comes back when the guard is dropped.
pub struct LogSilence {
    previous: log::LevelFilter,
}

impl LogSilence {
    pub fn start() -> Self {
        let previous = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        LogSilence { previous }
    }
}

impl Drop for LogSilence {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{NodePath, PaletteMode};
    use crate::value::Properties;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let data = Value::Object(
            Properties::new()
                .with("a", 1)
                .with("b", Properties::new().with("c", 2)),
        );
        App::new(data, InspectOptions::default())
    }

    #[test]
    fn test_keys_drive_tree() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.tree.is_expanded(&NodePath::from("$ROOT.b")));
        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.tree.selected_path(&app.view),
            Some(NodePath::from("$ROOT.b.c"))
        );
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_keeps_expansion() {
        let mut app = app();
        app.tree.expand(&NodePath::from("$ROOT.b"));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.view.palette_mode, PaletteMode::Dark);
        assert!(app.tree.is_expanded(&NodePath::from("$ROOT.b")));
    }

    #[test]
    fn test_new_expand_paths_reset_tree() {
        let mut app = app();
        app.set_expand_paths(Some(vec!["b".to_string()]));
        assert!(app.tree.is_expanded(&NodePath::from("$ROOT.b")));
        assert_eq!(app.status_message, "Expansion reset");
    }

    #[test]
    fn test_log_silence_restores_level() {
        log::set_max_level(log::LevelFilter::Debug);
        {
            let _silence = LogSilence::start();
            assert_eq!(log::max_level(), log::LevelFilter::Off);
            assert!(!log::log_enabled!(log::Level::Error));
        }
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
