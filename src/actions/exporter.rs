//! Save: write the text buffer to an audio file

use super::warn_if_empty;
use crate::notify::Severity;
use crate::state::AppContext;
use crate::Result;
use chrono::{DateTime, TimeZone};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every saved file name (two spaces before the timestamp)
pub const SAVED_FILE_PREFIX: &str = "Writed Voice  ";

/// strftime pattern of the timestamp part
pub const SAVED_FILE_TIMESTAMP: &str = "%Y-%m-%d-%H.%M.%S";

pub const SAVED_FILE_EXTENSION: &str = "mp3";

/// File name for audio saved at `when`
pub fn saved_file_name<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        SAVED_FILE_PREFIX,
        when.format(SAVED_FILE_TIMESTAMP),
        SAVED_FILE_EXTENSION
    )
}

/// Confirmation text for a file `name` saved into `dir`
///
/// Relative folders live next to the program; absolute ones are named as is.
pub fn saved_message(dir: &Path, name: &str) -> String {
    if dir.is_relative() {
        format!(
            "File saved in the program directory in the '{}' folder as '{}'",
            dir.display(),
            name
        )
    } else {
        format!("File saved in '{}' as '{}'", dir.display(), name)
    }
}

/// Synthesize the current text into the output folder
///
/// Blocks until the file is written, then confirms with a dialog naming
/// it. Empty text shows the same warning as Listen and returns `Ok(None)`.
pub fn save(ctx: &mut AppContext) -> Result<Option<PathBuf>> {
    if warn_if_empty(ctx) {
        return Ok(None);
    }

    let dir = ctx.config.output_dir();
    fs::create_dir_all(&dir)?;

    let name = saved_file_name(&chrono::Local::now());
    let path = dir.join(&name);

    info!("Saving {} chars of speech to {:?}", ctx.text.len(), path);
    ctx.engine.save_to_file(ctx.text.contents(), &path)?;

    ctx.notifier.notify("Hooray!", &saved_message(&dir, &name), Severity::Information);

    Ok(Some(path))
}
