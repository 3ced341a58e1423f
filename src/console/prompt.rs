use std::io::{self, IsTerminal, Write};

use crate::error::ServiceResult;

/// Print a screen header.
pub fn header(title: &str) {
    println!();
    println!("=== {title} ===");
}

/// Read a value from stdin.
///
/// The value is returned verbatim except for the trailing line
/// terminator; leading and inner whitespace are preserved. `None` means
/// end of input.
pub fn read_value(prompt: &str) -> ServiceResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut value = String::new();
    if io::stdin().read_line(&mut value)? == 0 {
        return Ok(None);
    }

    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }

    Ok(Some(value))
}

/// Read a value from stdin without echoing it.
///
/// Masking needs a terminal; piped input falls back to a plain read.
pub fn read_secret(prompt: &str) -> ServiceResult<Option<String>> {
    if !io::stdin().is_terminal() {
        return read_value(prompt);
    }

    match rpassword::prompt_password(prompt) {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(error) => Err(error.into()),
    }
}
