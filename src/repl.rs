use rpnc::display::{format_stack, format_status, format_value};
use rpnc::{Calculator, Config};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

use crate::cli::print_help;
use crate::rcfile::{dirs_home, load_rpncrc};
use crate::terminal::{execute_line, terminal_width, OutputMode};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the interactive REPL
pub(crate) fn run_repl(config: &Config, mode: OutputMode, trace: bool) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    let mut calc = Calculator::from_config(config);
    calc.set_trace_mode(trace);

    // Load ~/.rpncrc (may preload constants onto the stack)
    load_rpncrc(&mut calc, mode);

    // Try to load history
    let history_path = dirs_home().map(|h| h.join(".rpnc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    if config.banner {
        println!("rpnc-{} (stack capacity {})", VERSION, calc.stack().capacity());
        println!("Type .help for help, exit to quit.");
    }

    loop {
        let prompt = format!("{}> ", format_status(calc.stack()));

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                // Handle built-in REPL commands (dot-prefix)
                match trimmed {
                    "exit" | "quit" => break,
                    ".help" | ".h" => {
                        print_help();
                        continue;
                    }
                    ".stack" | ".s" => {
                        if calc.stack().is_empty() {
                            println!("(empty)");
                        } else {
                            println!("{}", format_stack(calc.stack(), mode.precision, terminal_width()));
                        }
                        continue;
                    }
                    ".pop" | ".p" => {
                        match calc.pop() {
                            Some(value) => println!("{}", format_value(value, mode.precision)),
                            None => eprintln!("Stack is empty"),
                        }
                        continue;
                    }
                    ".clear" | ".c" => {
                        calc.clear();
                        continue;
                    }
                    _ => {}
                }

                if let Err(e) = execute_line(&mut calc, trimmed, mode, true) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - discard the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}
