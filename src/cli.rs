use crate::terminal::{execute_line, print_result, OutputMode};
use rpnc::{Calculator, Config, Operation};
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) json: bool,
    pub(crate) trace: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        json: false,
        trace: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                cli.json = true;
            }
            "--trace" => {
                cli.trace = true;
            }
            "-c" => {
                // Everything after -c is the program
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    let mut ops = String::new();
    for op in Operation::ALL {
        let words = op.words().join(" ");
        ops.push_str(&format!(
            "    {:<24}{} (code {}, {} arg{})\n",
            words,
            op.describe(),
            op.code(),
            op.arity(),
            if op.arity() == 1 { "" } else { "s" }
        ));
    }

    println!(
        r#"rpnc-{} - A complex-number RPN calculator

USAGE:
    rpnc                    Start interactive REPL
    rpnc -c <program>       Evaluate a program and print the top of stack
    rpnc <script.rpn>       Evaluate a script file
    rpnc --json             Print the whole stack as JSON
    rpnc --trace            Print each step to stderr
    rpnc --help             Show this help message
    rpnc --version          Show version

STARTUP:
    ~/.rpnc/config.toml     capacity, precision, banner
    ~/.rpncrc               Evaluated on REPL startup (if exists)
    RPNC_CAPACITY=N         Override stack capacity
    RPNC_PRECISION=N        Override displayed significant digits
    RPNC_BANNER=1           Show startup banner

NUMBERS:
    2  -1.5  1e3            Real
    4i  -i                  Imaginary
    3+4i  1.5-2i            Complex

OPERATIONS:
{}
REPL COMMANDS:
    .help, .h               Show this help
    .stack, .s              Show the whole stack
    .pop, .p                Pop and show top value
    .clear, .c              Clear the stack
    exit, quit              Exit the REPL

EXAMPLES:
    2 3 +                   # 5
    2 3 ^                   # 8 (base, then exponent)
    -4 sqrt                 # 2i
    3+4i im                 # 4
"#,
        VERSION, ops
    );
}

pub(crate) fn print_version() {
    println!("rpnc-{}", VERSION);
}

/// Evaluate a single program
pub(crate) fn execute_command(cmd: &str, config: &Config, mode: OutputMode, trace: bool) -> ExitCode {
    let mut calc = Calculator::from_config(config);
    calc.set_trace_mode(trace);

    match execute_line(&mut calc, cmd, mode, true) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a script file against a single calculator, printing the final
/// result
pub(crate) fn execute_script(path: &str, config: &Config, mode: OutputMode, trace: bool) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut calc = Calculator::from_config(config);
    calc.set_trace_mode(trace);

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = execute_line(&mut calc, trimmed, mode, false) {
            eprintln!("Error at line {}: {}", line_num + 1, e);
            return ExitCode::FAILURE;
        }
    }

    match print_result(&calc, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rpnc")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_command_takes_rest() {
        let cli = parse_args(&args(&["--json", "-c", "2", "3", "+"]));
        assert!(cli.json);
        assert_eq!(cli.command.as_deref(), Some("2 3 +"));
    }

    #[test]
    fn parse_script_and_flags() {
        let cli = parse_args(&args(&["--trace", "calc.rpn"]));
        assert!(cli.trace);
        assert_eq!(cli.script.as_deref(), Some("calc.rpn"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_help_and_version() {
        assert!(parse_args(&args(&["-h"])).help);
        assert!(parse_args(&args(&["--version"])).version);
    }
}
