//! Load Text: replace the buffer with a file's content

use crate::state::AppContext;
use crate::Result;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Read `path` as UTF-8 text
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Ask for a file and load it into the text buffer
///
/// Returns `Ok(false)` when the picker was cancelled. On a read or decode
/// error the buffer keeps its old content.
pub fn load_text(ctx: &mut AppContext) -> Result<bool> {
    let Some(path) = ctx.picker.pick_text_file() else {
        debug!("File picker cancelled");
        return Ok(false);
    };

    let text = read_text_file(&path)?;
    info!("Loaded {} chars from {:?}", text.len(), path);
    ctx.text.replace(text);
    Ok(true)
}
