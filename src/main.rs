//! rpnc - A complex-number RPN calculator
//!
//! Usage:
//!   rpnc              Start interactive REPL
//!   rpnc -c "prog"    Evaluate a single program
//!   rpnc script.rpn   Evaluate a script file

mod cli;
mod rcfile;
mod repl;
mod terminal;

use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use rpnc::Config;
use std::env;
use std::process::ExitCode;
use terminal::OutputMode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}; using defaults", e);
        Config::default()
    });
    let mode = OutputMode {
        precision: config.precision,
        json: cli.json,
    };

    if let Some(cmd) = cli.command {
        return execute_command(&cmd, &config, mode, cli.trace);
    }

    if let Some(script) = cli.script {
        return execute_script(&script, &config, mode, cli.trace);
    }

    match repl::run_repl(&config, mode, cli.trace) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
