//! Cher Core Library
//!
//! This crate provides the core functionality for cher, a command-line tool that
//! keeps a personal library of per-language `.editorconfig` snippets and
//! assembles them into a project's `.editorconfig`.
//!
//! # Key Features
//!
//! - **Command Classification**: Set-based recognition of command tokens in raw arguments
//! - **Snippet Store**: Directory-per-language storage of snippet files
//! - **Settings**: The persisted preferred editor and its fallbacks
//! - **Editor Launching**: A substitutable capability for opening snippets in an editor
//! - **Error Handling**: One error type for all failure modes
//!
//! # Examples
//!
//! Listing the configured languages:
//!
//! ```no_run
//! use cher_core::config::get_root_dir;
//! use cher_core::snippet_store::SnippetStore;
//!
//! let store = SnippetStore::new(get_root_dir(&None)?);
//! for language in store.list_languages()? {
//!     println!("{language}");
//! }
//! # Ok::<(), cher_core::error::Error>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod execution;
pub mod snippet_store;
