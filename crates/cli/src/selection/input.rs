use std::fmt::Display;
use std::io::{BufRead, Write};

use cher_core::error::{Error, Result};
use log::debug;

use super::menu::print_menu;

/// Prints `prompt`, then reads one line and returns it trimmed.
///
/// End of input yields an empty string.
pub fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Validates a 1-based answer against a menu of `len` items.
///
/// Returns the 0-based index.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the answer is not an integer or lies
/// outside `1..=len`.
pub fn parse_choice(answer: &str, len: usize) -> Result<usize> {
    let choice = answer
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidInput(format!("`{answer}` is not a number")))?;

    if choice < 1 || choice > len {
        return Err(Error::InvalidInput(format!(
            "Invalid choice. Please select a number between 1 and {len}"
        )));
    }

    Ok(choice - 1)
}

/// Shows a numbered menu of `items` and reads a single pick.
///
/// `action` completes the prompt, e.g. "edit" asks for "the file you want to
/// edit". Returns the 0-based index of the chosen item.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty menu or an invalid answer;
/// there is no retry.
pub fn select<R: BufRead, W: Write, T: Display>(
    items: &[T],
    action: &str,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    if items.is_empty() {
        return Err(Error::InvalidInput("there is nothing to choose from".to_string()));
    }

    print_menu(output, items)?;

    let answer = prompt_line(
        &format!("Enter the number of the file you want to {action}: "),
        input,
        output,
    )?;
    debug!("Selection answer: `{}`", answer);

    parse_choice(&answer, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_select(items: &[&str], answer: &str) -> (Result<usize>, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = select(items, "edit", &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3).unwrap(), 0);
        assert_eq!(parse_choice("3", 3).unwrap(), 2);
        assert_eq!(parse_choice(" 2 ", 3).unwrap(), 1);
    }

    #[test]
    fn test_parse_choice_rejects() {
        for answer in ["0", "4", "-1", "two", "", "1.5"] {
            assert!(
                matches!(parse_choice(answer, 3), Err(Error::InvalidInput(_))),
                "`{answer}` should be rejected"
            );
        }
    }

    #[test]
    fn test_select_accepts_first_and_last() {
        let items = ["a", "b", "c"];
        assert_eq!(run_select(&items, "1\n").0.unwrap(), 0);
        assert_eq!(run_select(&items, "3\n").0.unwrap(), 2);
    }

    #[test]
    fn test_select_prints_menu_and_prompt() {
        let (result, output) = run_select(&["std", "tabs"], "2\n");
        assert_eq!(result.unwrap(), 1);
        assert_eq!(
            output,
            "1. std\n2. tabs\nEnter the number of the file you want to edit: "
        );
    }

    #[test]
    fn test_select_rejects_out_of_range_and_garbage() {
        let items = ["a", "b"];
        for answer in ["0\n", "3\n", "abc\n", "\n", ""] {
            let (result, _) = run_select(&items, answer);
            assert!(matches!(result, Err(Error::InvalidInput(_))), "`{answer:?}`");
        }
    }

    #[test]
    fn test_select_reads_only_one_line() {
        let mut input = Cursor::new(b"9\n1\n".to_vec());
        let mut output = Vec::new();
        assert!(select(&["a"], "edit", &mut input, &mut output).is_err());

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "1\n");
    }

    #[test]
    fn test_select_empty_menu() {
        let (result, output) = run_select(&[], "1\n");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_line_trims_and_handles_eof() {
        let mut output = Vec::new();
        let mut input = Cursor::new(b"  vim  \n".to_vec());
        assert_eq!(prompt_line("Editor: ", &mut input, &mut output).unwrap(), "vim");
        assert_eq!(prompt_line("Editor: ", &mut input, &mut output).unwrap(), "");
        assert_eq!(String::from_utf8(output).unwrap(), "Editor: Editor: ");
    }
}
