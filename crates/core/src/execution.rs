use std::path::Path;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Opens a file in an external editor and blocks until it is closed.
pub trait EditorLauncher {
    /// # Errors
    ///
    /// Returns an error if the editor cannot be launched or exits with a
    /// non-zero status.
    fn launch(&self, editor: &str, path: &Path) -> Result<()>;
}

impl<T: EditorLauncher + ?Sized> EditorLauncher for &T {
    fn launch(&self, editor: &str, path: &Path) -> Result<()> {
        (**self).launch(editor, path)
    }
}

/// Launches the editor as a child process sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEditor;

impl EditorLauncher for ProcessEditor {
    fn launch(&self, editor: &str, path: &Path) -> Result<()> {
        let command = build_editor_command(editor, path)?;
        execute_command(editor, command)
    }
}

/// Builds the editor invocation. The editor string is split on whitespace;
/// extra words are passed before the file path.
///
/// # Errors
///
/// Returns an error if the editor string is blank.
pub fn build_editor_command(editor: &str, path: &Path) -> Result<Command> {
    let mut words = editor.split_whitespace();
    let Some(program) = words.next() else {
        return Err(Error::InvalidInput("the editor command is empty".to_string()));
    };

    let mut command = Command::new(program);
    command.args(words).arg(path);
    Ok(command)
}

/// Runs a command with inherited stdio and waits for it to exit.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(editor: &str, mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!("Launching editor: {:?}", command);

    let status = command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|original| Error::SubProcess {
            editor: editor.to_string(),
            original,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit {
            editor: editor.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_build_editor_command_single_word() {
        let command = build_editor_command("nano", Path::new("/tmp/go/std.editorconfig")).unwrap();
        assert_eq!(command.get_program(), "nano");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("/tmp/go/std.editorconfig")]);
    }

    #[test]
    fn test_build_editor_command_with_flags() {
        let command = build_editor_command("code  --wait", Path::new("a.editorconfig")).unwrap();
        assert_eq!(command.get_program(), "code");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("--wait"), OsStr::new("a.editorconfig")]);
    }

    #[test]
    fn test_build_editor_command_blank() {
        let result = build_editor_command("   ", Path::new("a.editorconfig"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_missing_editor_is_process_error() {
        let result = ProcessEditor.launch(
            "cher-editor-that-does-not-exist",
            Path::new("a.editorconfig"),
        );
        assert!(matches!(result, Err(Error::SubProcess { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor_is_exit_error() {
        let result = ProcessEditor.launch("false", Path::new("a.editorconfig"));
        assert!(matches!(result, Err(Error::SubProcessExit { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_editor() {
        assert!(ProcessEditor.launch("true", Path::new("a.editorconfig")).is_ok());
    }
}
