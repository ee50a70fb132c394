//! `attendance` — interactive front end for the attendance ledger
//!
//! Usage: `attendance [DATA_DIR]`. Without an argument the tables are read
//! from `$ATTENDANCE_DATA_DIR`, or the working directory.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use attendance_ledger::{
    AttendanceConfig, AttendanceDesk, AttendanceError, Prompter, Result, Session,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prompter over the process's stdin/stdout
struct TerminalPrompter {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
}

impl TerminalPrompter {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Err(AttendanceError::InputClosed(prompt.trim().to_string()));
        }
        Ok(line)
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(dir) => AttendanceConfig::new(dir),
        None => AttendanceConfig::from_env(),
    };
    let desk = AttendanceDesk::open(&config)?;

    println!("Welcome to the Offline Attendance System");
    let outcome = Session::new(&desk).run(&mut TerminalPrompter::new())?;
    println!("\n{outcome}");
    Ok(())
}

fn env_default(var: &str, value: &str) {
    if std::env::var_os(var).is_none() {
        std::env::set_var(var, value);
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries prompts and results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Show full reports: no row cap, no cell truncation.
    env_default("POLARS_FMT_MAX_ROWS", "-1");
    env_default("POLARS_FMT_STR_LEN", "256");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Attendance session failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
