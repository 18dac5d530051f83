//! Cher CLI Library
//!
//! This crate provides the command-line interface for cher, a tool that keeps
//! per-language `.editorconfig` snippets under a root config directory and
//! composes them into the current project. It handles argument parsing,
//! numbered selection prompts, and the workflow behind each command.
//!
//! # Architecture
//!
//! - [`cli_args`]: Global options parsed with `clap`; command words kept verbatim
//! - [`selection`]: Numbered menus and single-shot line prompts
//! - [`workflow`]: The driver executing `init`, `help`, `add`, `new`, `remove`, `edit` and `list`
//!
//! # Examples
//!
//! ```bash
//! # Create the root directory and choose an editor
//! cher init
//!
//! # Compose .editorconfig from one go and one rust snippet
//! cher add go rust
//!
//! # Create a new rust snippet in the editor
//! cher new rust
//!
//! # Remove or edit a snippet
//! cher remove go
//! cher edit rust
//!
//! # List configured languages
//! cher list
//! ```

pub mod cli_args;
pub mod selection;
pub mod usage;
pub mod workflow;
