//! Listen: speak the text buffer

use super::warn_if_empty;
use crate::state::AppContext;
use crate::Result;
use log::info;

/// Speak the current text and wait until playback ends
///
/// Empty text shows a warning instead and never reaches the engine.
pub fn listen(ctx: &mut AppContext) -> Result<()> {
    if warn_if_empty(ctx) {
        return Ok(());
    }

    info!("Speaking {} chars", ctx.text.len());
    ctx.engine.speak_and_wait(ctx.text.contents())
}
