//! Configuration path utilities and the persisted editor setting.
//!
//! The root config directory defaults to `<user config dir>/Cher` and holds one
//! directory per language plus the `cher.config.ini` settings file.

use std::env;
use std::path::{Path, PathBuf};

use ini::Ini;
use log::{debug, warn};

use crate::error::{Error, Result};

/// Name of the root directory created under the user config directory
const ROOT_DIR_NAME: &str = "Cher";
/// Name of the settings file inside the root directory
pub const SETTINGS_FILE_NAME: &str = "cher.config.ini";

const EDITOR_SECTION: &str = "editor";
const EDITOR_KEY: &str = "command";

/// Environment variable consulted when no editor is persisted
pub const EDITOR_ENV_VAR: &str = "EDITOR";

#[cfg(windows)]
pub const DEFAULT_EDITOR: &str = "notepad.exe";
#[cfg(not(windows))]
pub const DEFAULT_EDITOR: &str = "nano";

/// Resolves the root config directory.
///
/// A custom path has `~` expanded; otherwise the OS user config directory is
/// used.
///
/// # Errors
///
/// Returns [`Error::NoConfigDir`] if no custom path is given and the OS does
/// not report a user config directory.
///
/// # Examples
///
/// ```
/// use cher_core::config::get_root_dir;
///
/// let custom = get_root_dir(&Some("/tmp/cher".to_string()))?;
/// assert_eq!(custom, std::path::PathBuf::from("/tmp/cher"));
/// # Ok::<(), cher_core::error::Error>(())
/// ```
pub fn get_root_dir(root_dir_arg: &Option<String>) -> Result<PathBuf> {
    if let Some(root_dir) = root_dir_arg {
        return Ok(PathBuf::from(shellexpand::tilde(root_dir).as_ref()));
    }

    dirs::config_dir()
        .map(|config_dir| config_dir.join(ROOT_DIR_NAME))
        .ok_or(Error::NoConfigDir)
}

pub fn get_settings_path(root_dir: &Path) -> PathBuf {
    root_dir.join(SETTINGS_FILE_NAME)
}

/// Reads the persisted editor command.
///
/// Returns `None` when the file does not exist or carries no non-empty
/// `editor.command` value.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_editor_setting(settings_path: &Path) -> Result<Option<String>> {
    if !settings_path.exists() {
        return Ok(None);
    }

    let settings = Ini::load_from_file(settings_path)
        .map_err(|e| Error::settings_error(&settings_path.display().to_string(), e))?;

    Ok(settings
        .get_from(Some(EDITOR_SECTION), EDITOR_KEY)
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .map(ToString::to_string))
}

/// Writes the settings file, replacing any previous content.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_editor_setting(settings_path: &Path, command: &str) -> Result<()> {
    let mut settings = Ini::new();
    settings
        .with_section(Some(EDITOR_SECTION))
        .set(EDITOR_KEY, command);

    settings.write_to_file(settings_path).map_err(|e| {
        Error::io_error("settings file", &settings_path.display().to_string(), e)
    })
}

/// Editor used when nothing is persisted: `$EDITOR`, then the OS default.
pub fn fallback_editor() -> String {
    choose_fallback_editor(env::var(EDITOR_ENV_VAR).ok())
}

/// Picks the environment editor when it is set and non-blank.
pub fn choose_fallback_editor(env_editor: Option<String>) -> String {
    env_editor
        .filter(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Resolves the editor for one `new`/`edit` invocation.
///
/// Settings that cannot be read are logged and skipped, never fatal.
pub fn resolve_editor(settings_path: &Path) -> String {
    match read_editor_setting(settings_path) {
        Ok(Some(editor)) => {
            debug!("Using persisted editor `{}`", editor);
            editor
        }
        Ok(None) => fallback_editor(),
        Err(e) => {
            warn!("{e}");
            fallback_editor()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_get_root_dir_with_custom_path() {
        let custom = Some("/custom/Cher".to_string());
        let result = get_root_dir(&custom).unwrap();
        assert_eq!(result, PathBuf::from("/custom/Cher"));
    }

    #[test]
    fn test_get_root_dir_with_tilde() {
        let custom = Some("~/cher-snippets".to_string());
        let result = get_root_dir(&custom).unwrap();
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.ends_with("cher-snippets"));
    }

    #[test]
    fn test_get_settings_path() {
        let path = get_settings_path(Path::new("/root/Cher"));
        assert_eq!(path, PathBuf::from("/root/Cher/cher.config.ini"));
    }

    #[test]
    fn test_write_then_read_editor_setting() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());

        write_editor_setting(&path, "vim").unwrap();
        assert_eq!(read_editor_setting(&path).unwrap(), Some("vim".to_string()));

        write_editor_setting(&path, "code --wait").unwrap();
        assert_eq!(
            read_editor_setting(&path).unwrap(),
            Some("code --wait".to_string())
        );
    }

    #[test]
    fn test_read_editor_setting_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());
        assert_eq!(read_editor_setting(&path).unwrap(), None);
    }

    #[test]
    fn test_read_editor_setting_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());
        fs::write(&path, "[other]\nkey = value\n").unwrap();
        assert_eq!(read_editor_setting(&path).unwrap(), None);
    }

    #[test]
    fn test_read_editor_setting_spaced_format() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());
        fs::write(&path, "[editor]\ncommand = hx\n").unwrap();
        assert_eq!(read_editor_setting(&path).unwrap(), Some("hx".to_string()));
    }

    #[test]
    fn test_resolve_editor_prefers_setting() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());
        write_editor_setting(&path, "micro").unwrap();
        assert_eq!(resolve_editor(&path), "micro");
    }

    #[test]
    fn test_choose_fallback_editor_prefers_environment() {
        assert_eq!(choose_fallback_editor(Some("vi".to_string())), "vi");
    }

    #[test]
    fn test_choose_fallback_editor_defaults() {
        assert_eq!(choose_fallback_editor(None), DEFAULT_EDITOR);
        assert_eq!(choose_fallback_editor(Some("  ".to_string())), DEFAULT_EDITOR);
    }

    #[test]
    fn test_resolve_editor_setting_beats_environment() {
        let dir = TempDir::new().unwrap();
        let path = get_settings_path(dir.path());
        fs::write(&path, "[editor]\ncommand = kak\n").unwrap();
        assert_eq!(resolve_editor(&path), "kak");
    }
}
