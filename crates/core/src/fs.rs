//! Filesystem utilities

use std::env;
use std::path::{Path, PathBuf};

use log::warn;

/// Resolve `relative` against the directory containing the running executable.
///
/// Falls back to the current directory when the executable path is unavailable.
pub fn exe_relative_path(relative: &str) -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match base {
        Some(dir) => dir.join(relative),
        None => {
            warn!("unable to locate executable directory, resolving {relative} from cwd");
            PathBuf::from(relative)
        }
    }
}

/// Check if a path is a regular file
pub fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}
