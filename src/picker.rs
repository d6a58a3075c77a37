//! Native file picker

use log::debug;
use rfd::FileDialog;
use std::path::PathBuf;

/// Asks the user for a text file to load
pub trait FilePicker {
    /// Returns `None` when the user cancels
    fn pick_text_file(&mut self) -> Option<PathBuf>;
}

/// Native OS "open file" dialog, limited to existing files
#[derive(Debug, Default)]
pub struct DialogFilePicker {
    /// Folder the dialog opens in; remembers the last pick
    start_dir: Option<PathBuf>,
}

impl FilePicker for DialogFilePicker {
    fn pick_text_file(&mut self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().set_title("Open text");
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let picked = dialog.pick_file();
        debug!("File picker returned {:?}", picked);

        if let Some(parent) = picked.as_deref().and_then(|p| p.parent()) {
            self.start_dir = Some(parent.to_path_buf());
        }
        picked
    }
}
