//! Terminal logging with colored module prefixes.
//!
//! ```ignore
//! log!("config"; "base path `{}`", base);
//! // [config] base path `/running_page/`
//! ```
//!
//! Status lines only. Data printed by `show`/`head` goes to stdout without
//! a prefix so it can be piped; `[error]` lines go to stderr.

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stderr, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Display length of `[module] ` for a module name of `module_len` bytes.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Falls back to 120 columns if detection fails (e.g. output is piped).
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write one `[module] message` line, truncated to the terminal width.
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let width = get_terminal_width() as usize;

    if is_error(&module_lower) {
        write_line(&mut stderr().lock(), module, &module_lower, message, width);
    } else {
        let mut stdout = stdout().lock();
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
        write_line(&mut stdout, module, &module_lower, message, width);
    }
}

#[inline]
fn is_error(module_lower: &str) -> bool {
    module_lower == "error"
}

fn write_line(out: &mut impl Write, module: &str, module_lower: &str, message: &str, width: usize) {
    let prefix = colorize_prefix(module, module_lower);
    let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
    let message = truncate_str(message, max_msg_len);

    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "check" => prefix.bright_green().bold(),
        "config" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
