//! Terminal output helpers - pure formatting, no prompts.
//!
//! Every workflow stage reports through these before any later stage runs,
//! so a failure leaves a readable audit trail of what already happened.

use console::style;

/// Print a status message with a yellow arrow
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a success message with a green checkmark
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an error message in red to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Show the git command for pushing a locally created tag later
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_functions_do_not_panic() {
        // Visual verification - output goes to stdout/stderr
        display_status("test status");
        display_success("test success");
        display_error("test error");
        display_manual_push_instruction("v1.0.0", "origin");
    }
}
