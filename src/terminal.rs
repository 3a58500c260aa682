use rpnc::{display, Calculator};

/// How results are printed
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputMode {
    /// Significant digits for plain output
    pub(crate) precision: usize,
    /// Print the whole stack as JSON instead of the top value
    pub(crate) json: bool,
}

/// Execute a single line of rpnc input, optionally printing the result
pub(crate) fn execute_line(
    calc: &mut Calculator,
    input: &str,
    mode: OutputMode,
    print_output: bool,
) -> Result<(), String> {
    calc.eval(input).map_err(|e| e.to_string())?;
    if print_output {
        print_result(calc, mode)?;
    }
    Ok(())
}

/// Print the top of the stack (or the whole stack as JSON)
pub(crate) fn print_result(calc: &Calculator, mode: OutputMode) -> Result<(), String> {
    if mode.json {
        let json = serde_json::to_string(calc.stack()).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else if let Some(top) = calc.top() {
        println!("{}", display::format_value(top, mode.precision));
    }
    Ok(())
}

/// Get terminal width, defaulting to 80
pub(crate) fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}
