use crate::terminal::{execute_line, OutputMode};
use rpnc::Calculator;
use std::env;
use std::fs;

/// Get home directory
pub(crate) fn dirs_home() -> Option<std::path::PathBuf> {
    env::var_os("HOME").map(std::path::PathBuf::from)
}

/// Load and execute ~/.rpncrc if it exists.
/// Values it pushes stay on the stack.
pub(crate) fn load_rpncrc(calc: &mut Calculator, mode: OutputMode) {
    let rc_path = match dirs_home() {
        Some(home) => home.join(".rpncrc"),
        None => return,
    };

    let content = match fs::read_to_string(&rc_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    load_rc_content(calc, &content, "~/.rpncrc", mode);
}

/// Execute RC content line by line, warning on lines that fail
pub(crate) fn load_rc_content(calc: &mut Calculator, content: &str, source: &str, mode: OutputMode) {
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = execute_line(calc, trimmed, mode, false) {
            eprintln!("Warning: {} line {}: {}", source, line_num + 1, e);
        }
    }
}
