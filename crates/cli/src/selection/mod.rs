//! Numbered selection and line prompts on a reader/writer pair.
//!
//! Every interaction is single-shot: one line of input is read and a bad
//! answer fails the current command instead of prompting again.

// Export public items from submodules
pub mod input;
pub mod menu;

// Re-exports for convenience
pub use input::{parse_choice, prompt_line, select};
pub use menu::print_menu;
