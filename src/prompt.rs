//! Interactive yes/no confirmation on stdout/stdin.

use std::io::{self, Write};

/// Asks `question [y/n]` and reads the answer. Accepts `y`/`yes`/`n`/`no`
/// in any case and asks again on anything else. End of input counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    let mut line = String::new();
    loop {
        print!("{} [y/n] ", question);
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}
