use std::fmt::Display;
use std::io::Write;

use cher_core::error::Result;

/// Prints each item on its own line prefixed with its 1-based ordinal.
pub fn print_menu<W: Write, T: Display>(output: &mut W, items: &[T]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, item)?;
    }
    Ok(())
}
