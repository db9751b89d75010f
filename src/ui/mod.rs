//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application state and keyboard event loop
//! - **[`tree`]** — the collapsible tree widget: [`TreeState`] plus its render function
//! - **[`status`]** — status bar with the selected path and keybindings
//! - **[`plain`]** — uncolored text output of the same rows, for `--print`
//! - **[`theme`]** — light and dark palettes keyed by token class
//!
//! The entry point for consumers is [`App`]: construct it with a [`Value`] and
//! [`InspectOptions`], then call [`App::run`] to start the event loop.
//!
//! [`Value`]: crate::value::Value
//! [`InspectOptions`]: crate::inspect::InspectOptions
//! [`App::run`]: app::App::run

pub mod app;
pub mod plain;
pub mod status;
pub mod theme;
pub mod tree;

pub use app::{App, LogSilence};
pub use plain::{render_plain, PlainMode};
pub use theme::Theme;
pub use tree::TreeState;
