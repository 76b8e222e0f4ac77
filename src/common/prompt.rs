//! Interactive confirmation prompts.

use std::io::{self, BufRead, Write};

/// Ask a y/N question on stdin. Returns true only for "y" or "yes".
///
/// A read failure (e.g. closed stdin in a non-interactive run) counts as a
/// refusal, so the caller falls through to its cancel path.
pub fn confirm(question: &str) -> bool {
    print!("{} (y/N): ", question);
    let _ = io::stdout().flush();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }

    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}
