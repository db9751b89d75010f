//! # Introduction
//!
//! objscope renders an in-memory value as an expandable tree, one node per own
//! property, with labels colored by value category and a light or dark palette.
//! It is meant for looking inside application state while debugging.
//!
//! ## Pipeline
//!
//! ```text
//! JSON / Value → classify → label → style class → Node tree → TreeState → TUI
//! ```
//!
//! 1. [`value`] — the inspected [`value::Value`] tagged union and JSON loading.
//! 2. [`inspect`] — classification, labels, the recursive entry renderer and the
//!    root [`inspect::inspect`] call that also computes the default-expanded set.
//! 3. [`color`] — CSS color parsing and lightening for color swatches.
//! 4. [`ui`] — ratatui-based tree widget, status bar and app loop.
//! 5. [`error`] — errors from loading input and driving the terminal.
//!
//! ## Example
//!
//! ```
//! use objscope::inspect::{inspect, InspectOptions};
//! use objscope::value::{Properties, Value};
//!
//! let data = Value::Object(
//!     Properties::new()
//!         .with("a", 1)
//!         .with("b", Properties::new().with("c", 2)),
//! );
//! let options = InspectOptions {
//!     expand_paths: Some(vec!["b".to_string()]),
//!     ..InspectOptions::default()
//! };
//! let view = inspect(&data, &options);
//!
//! assert_eq!(view.nodes[0].display_label(), "a: 1");
//! assert_eq!(view.nodes[1].children[0].id.as_str(), "$ROOT.b.c");
//! assert_eq!(view.remount_key, "$ROOT.b");
//! ```

pub mod color;
pub mod error;
pub mod inspect;
pub mod ui;
pub mod value;
