//! Opens a saved image in the host's default viewer.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    // The empty argument is the window title `start` expects before a path.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Launches the platform viewer for `path` and returns without waiting for it.
pub fn show(path: &Path) -> Result<()> {
    let mut cmd = viewer_command(path);
    log::info!("opening {} with {:?}", path.display(), cmd.get_program());
    cmd.spawn()
        .map(|_| ())
        .map_err(|source| Error::Viewer { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_command_targets_path() {
        let path = Path::new("some/output.png");
        let cmd = viewer_command(path);
        let last = cmd.get_args().last().unwrap();
        assert_eq!(last, path.as_os_str());
    }
}
