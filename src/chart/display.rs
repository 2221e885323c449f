//! Hand a finished chart to the platform image viewer.

use crate::ui::messages::{info, warning};
use std::path::Path;
use std::process::Command;

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    }
}

/// Only called once the file is complete; a missing viewer is not fatal.
pub fn show(path: &Path) {
    info(format!("Opening {}", path.display()));

    match viewer_command(path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => warning(format!(
            "Image viewer exited with {s}; chart saved at {}",
            path.display()
        )),
        Err(e) => warning(format!(
            "Could not launch image viewer ({e}); chart saved at {}",
            path.display()
        )),
    }
}
