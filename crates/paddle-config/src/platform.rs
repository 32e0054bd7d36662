//! Resolution of the read-only assets directory that holds the
//! configuration resource.

use std::path::{Path, PathBuf};

/// Name of the assets directory shipped next to the game binary.
pub const STREAMING_ASSETS_DIR: &str = "StreamingAssets";

const APP_NAME: &str = "paddle-game";

/// Locate the streaming assets directory.
///
/// Checks `<exe dir>/StreamingAssets` first, then
/// `<data dir>/paddle-game/StreamingAssets`. Returns `None` if the executable
/// directory has no assets and the OS exposes no data directory.
pub fn streaming_assets_dir() -> Option<PathBuf> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(STREAMING_ASSETS_DIR)));

    resolve_from(beside_exe.as_deref(), dirs::data_dir().as_deref())
}

/// Pick between the executable-relative and data-dir candidates.
///
/// The executable-relative directory wins only if it exists on disk.
pub fn resolve_from(beside_exe: Option<&Path>, data_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = beside_exe
        && dir.is_dir()
    {
        return Some(dir.to_path_buf());
    }
    data_dir.map(|d| d.join(APP_NAME).join(STREAMING_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_exe_dir_wins() {
        let exe_dir = tempfile::tempdir().unwrap();
        let data_dir = tempfile::tempdir().unwrap();
        let resolved = resolve_from(Some(exe_dir.path()), Some(data_dir.path()));
        assert_eq!(resolved.as_deref(), Some(exe_dir.path()));
    }

    #[test]
    fn test_missing_exe_dir_falls_back_to_data_dir() {
        let data_dir = tempfile::tempdir().unwrap();
        let missing = data_dir.path().join("no-such-dir");
        let resolved = resolve_from(Some(missing.as_path()), Some(data_dir.path())).unwrap();
        assert_eq!(
            resolved,
            data_dir.path().join(APP_NAME).join(STREAMING_ASSETS_DIR)
        );
    }

    #[test]
    fn test_nothing_resolvable() {
        assert!(resolve_from(None, None).is_none());
    }

    #[test]
    fn test_streaming_assets_dir_is_absolute() {
        if let Some(dir) = streaming_assets_dir() {
            assert!(dir.is_absolute(), "assets dir is not absolute: {dir:?}");
            assert!(dir.ends_with(STREAMING_ASSETS_DIR));
        }
    }
}
