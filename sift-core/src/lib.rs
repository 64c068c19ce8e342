//! Matching and selection state behind the `sift` fuzzy finder.
//!
//! The terminal side lives elsewhere; this crate only needs something that
//! yields [`Event`]s and something that draws a [`Frame`].

pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod matcher;
pub mod render;
pub mod session;
pub mod viewport;

pub use config::FinderConfig;
pub use display::format_for_display;
pub use error::FinderError;
pub use event::{Event, InputSource};
pub use matcher::matches;
pub use render::{Frame, Renderer, Row};
pub use session::{run, run_with_config, Session, State};
pub use viewport::Dimensions;
