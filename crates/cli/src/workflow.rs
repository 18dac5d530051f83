//! Execution of one classified command against the snippet store.
//!
//! The driver owns its input and output streams and the editor capability so
//! that each operation can be driven from tests without a terminal.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use cher_core::commands::{classify, operands, Command};
use cher_core::config::{get_settings_path, resolve_editor, write_editor_setting};
use cher_core::error::{Error, Result};
use cher_core::execution::EditorLauncher;
use cher_core::snippet_store::{Snippet, SnippetStore, SNIPPET_EXTENSION};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use log::{debug, info};

use crate::selection::{prompt_line, select};
use crate::usage::USAGE;

/// File written to the working directory by `add`
pub const EDITORCONFIG_FILE_NAME: &str = ".editorconfig";

pub struct Workflow<L, R, W> {
    store: SnippetStore,
    settings_path: PathBuf,
    working_dir: PathBuf,
    launcher: L,
    input: R,
    output: W,
    debug: bool,
}

impl<L: EditorLauncher, R: BufRead, W: Write> Workflow<L, R, W> {
    pub fn new(store: SnippetStore, launcher: L, input: R, output: W) -> Self {
        let settings_path = get_settings_path(store.root());
        Self {
            store,
            settings_path,
            working_dir: PathBuf::from("."),
            launcher,
            input,
            output,
            debug: false,
        }
    }

    /// Directory that receives the composed `.editorconfig`.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Enables the argument and state dump printed before executing.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Classifies `arguments` and executes the first flagged command in
    /// priority order. Later flags are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first error of the executed operation; work completed
    /// before the failure is not rolled back.
    pub fn run<S: AsRef<str>>(&mut self, arguments: &[S]) -> Result<()> {
        if self.debug {
            self.dump_arguments(arguments)?;
        }

        let parsed = classify(arguments);
        if self.debug {
            writeln!(self.output, "{parsed}")?;
        }

        let Some(command) = parsed.selected() else {
            debug!("No command recognized in {} argument(s)", arguments.len());
            return self.help();
        };

        let operands: Vec<String> = operands(command, arguments)
            .iter()
            .map(|argument| argument.as_ref().to_string())
            .collect();
        debug!("Running `{}` with operands [{}]", command, operands.iter().join(", "));

        match command {
            Command::Init => self.init(),
            Command::Help => self.help(),
            Command::Add => self.add(&operands),
            Command::New => self.new_snippets(&operands),
            Command::Remove => self.remove(&operands),
            Command::Edit => self.edit(&operands),
            Command::List => self.list(),
        }
    }

    fn dump_arguments<S: AsRef<str>>(&mut self, arguments: &[S]) -> Result<()> {
        for (index, argument) in arguments.iter().enumerate() {
            writeln!(self.output, "argument {}: {}", index, argument.as_ref())?;
        }
        writeln!(self.output, "len(arguments): {}", arguments.len())?;
        writeln!(self.output, "root: {}", self.store.root().display())?;
        Ok(())
    }

    pub fn help(&mut self) -> Result<()> {
        write!(self.output, "{USAGE}")?;
        Ok(())
    }

    /// Creates the root directory if needed, then persists the editor the
    /// user names. The setting is rewritten on every run.
    pub fn init(&mut self) -> Result<()> {
        if self.store.ensure_root()? {
            writeln!(
                self.output,
                "We do not provide default .editorconfig files.\n\
                 You will have to create your own in {}.\n\
                 We recommend using one directory <lang> per language.",
                self.store.root().display()
            )?;
        }

        let editor = prompt_line(
            "Please enter the command for opening the text editor of your choice: ",
            &mut self.input,
            &mut self.output,
        )?;

        if editor.is_empty() {
            return Err(Error::InvalidInput(
                "no command for opening a text editor was given".to_string(),
            ));
        }

        write_editor_setting(&self.settings_path, &editor)?;
        info!("Saved editor `{}` to `{}`", editor, self.settings_path.display());
        Ok(())
    }

    /// Composes `.editorconfig` from one picked snippet per language.
    ///
    /// Nothing is written unless every language succeeds.
    pub fn add(&mut self, languages: &[String]) -> Result<()> {
        if languages.is_empty() {
            return Err(Error::Usage("add <lang(s)>".to_string()));
        }

        let mut contents = Vec::new();
        for language in languages {
            if language == Command::Help.token() {
                return self.help();
            }

            let snippet = self.choose_snippet(language, "add")?;
            contents.extend(self.store.read_snippet(language, &snippet.file_name)?);
        }

        let target = editorconfig_path(&self.working_dir);
        fs::write(&target, &contents)
            .map_err(|e| Error::io_error("output file", &target.display().to_string(), e))?;

        writeln!(self.output, "Wrote {}", target.display())?;
        Ok(())
    }

    /// Opens the editor on a new snippet for each existing language.
    ///
    /// Missing languages and empty names are skipped; an editor failure stops
    /// the whole command.
    pub fn new_snippets(&mut self, languages: &[String]) -> Result<()> {
        if languages.is_empty() {
            return Err(Error::Usage("new <lang(s)>".to_string()));
        }

        let editor = resolve_editor(&self.settings_path);

        for language in languages {
            let language_dir = self.store.language_dir(language)?;
            if !language_dir.is_dir() {
                writeln!(self.output, "Directory {} does not exist.", language_dir.display())?;
                self.suggest_language(language)?;
                continue;
            }

            let name = prompt_line(
                &format!("Please enter the name for the new {language} configuration file: "),
                &mut self.input,
                &mut self.output,
            )?;

            if name.is_empty() {
                writeln!(
                    self.output,
                    "Not creating a new configuration file for {language} as no name was provided"
                )?;
                continue;
            }

            let path = self
                .store
                .snippet_path(language, &format!("{name}.{SNIPPET_EXTENSION}"))?;
            self.launcher.launch(&editor, &path)?;
        }

        Ok(())
    }

    pub fn remove(&mut self, languages: &[String]) -> Result<()> {
        let language = single_language(languages, "remove <lang>")?;
        let snippet = self.choose_snippet(language, "delete")?;

        self.store.delete_snippet(language, &snippet.file_name)?;
        writeln!(self.output, "File {} has been deleted.", snippet.file_name)?;
        Ok(())
    }

    pub fn edit(&mut self, languages: &[String]) -> Result<()> {
        let language = single_language(languages, "edit <lang>")?;
        let editor = resolve_editor(&self.settings_path);
        let snippet = self.choose_snippet(language, "edit")?;

        let path = self.store.snippet_path(language, &snippet.file_name)?;
        self.launcher.launch(&editor, &path)
    }

    /// Prints every language directory name, one per line.
    pub fn list(&mut self) -> Result<()> {
        for language in self.store.list_languages()? {
            writeln!(self.output, "{language}")?;
        }
        Ok(())
    }

    fn choose_snippet(&mut self, language: &str, action: &str) -> Result<Snippet> {
        let mut snippets = match self.store.list_snippets(language) {
            Ok(snippets) => snippets,
            Err(e) if e.is_not_found() => {
                self.suggest_language(language)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let language_dir = self.store.language_dir(language)?;
        if snippets.is_empty() {
            return Err(Error::not_found(
                "snippets in language directory",
                &language_dir.display().to_string(),
            ));
        }

        writeln!(self.output, "Files in {} directory:", language_dir.display())?;
        let names: Vec<&str> = snippets
            .iter()
            .map(|snippet| snippet.display_name.as_str())
            .collect();
        let index = select(&names, action, &mut self.input, &mut self.output)?;

        Ok(snippets.swap_remove(index))
    }

    fn suggest_language(&mut self, language: &str) -> Result<()> {
        if let Some(candidate) = closest_language(&self.store, language) {
            writeln!(self.output, "Did you mean `{candidate}`?")?;
        }
        Ok(())
    }
}

fn single_language<'a>(languages: &'a [String], usage: &str) -> Result<&'a str> {
    match languages {
        [language] => Ok(language.as_str()),
        _ => Err(Error::Usage(usage.to_string())),
    }
}

/// Best fuzzy match for `language` among the existing language directories.
pub fn closest_language(store: &SnippetStore, language: &str) -> Option<String> {
    let matcher = SkimMatcherV2::default();

    store
        .list_languages()
        .ok()?
        .into_iter()
        .filter(|candidate| candidate != language)
        .filter_map(|candidate| {
            matcher
                .fuzzy_match(&candidate, language)
                .map(|score| (score, candidate))
        })
        .sorted_by_key(|(score, _)| -score)
        .map(|(_, candidate)| candidate)
        .next()
}

/// Path of the composed file for a given working directory.
pub fn editorconfig_path(working_dir: &Path) -> PathBuf {
    working_dir.join(EDITORCONFIG_FILE_NAME)
}
