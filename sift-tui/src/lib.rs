mod input;
mod renderer;
mod session;
mod widgets;

pub use input::{map_key, KeyboardInput};
pub use renderer::TerminalRenderer;
pub use session::TuiSession;

use anyhow::Result;
use sift_core::FinderConfig;

/// Run the finder on an existing [`TuiSession`].
pub fn fuzzy_finder_with<S: AsRef<str>>(
    candidates: &[S],
    config: &FinderConfig,
    session: &mut TuiSession,
) -> Result<Option<String>> {
    sift_core::run_with_config(
        candidates,
        config,
        KeyboardInput,
        TerminalRenderer::new(&mut **session),
    )
}

/// Open a standalone finder that owns the terminal until a pick is made.
pub fn fuzzy_finder<S: AsRef<str>>(candidates: &[S], config: &FinderConfig) -> Result<Option<String>> {
    fuzzy_finder_with(candidates, config, &mut TuiSession::new()?)
}
