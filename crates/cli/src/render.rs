//! User-facing text rendering.
//!
//! All greeting, prompt, table, and error text lives here; the engine
//! itself never prints.

use std::io::{self, Write};
use std::path::Path;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use engine::{CpuInfo, DirEntry, EngineError, EntryKind, HostReport, Outcome};

/// Clear the screen and print the welcome banner.
pub fn greeting(username: &str) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));

    println!(
        "{}",
        format!("Welcome to the File Manager, {username}!").blue()
    );
    println!(
        "{}",
        r#"Type ".exit" or press "CTRL" + "C" to exit from File Manager"#.dark_grey()
    );
}

/// Print the goodbye banner.
pub fn farewell(username: &str) {
    println!(
        "{}",
        format!("\nThank you for using File Manager, {username}, goodbye!").red()
    );
}

/// Print the prompt showing the current directory.
pub fn prompt(current_dir: &Path) {
    println!(
        "\nYou are currently in {}",
        current_dir.display().to_string().blue()
    );
    print!("Enter your command: ");
    let _ = io::stdout().flush();
}

/// Render a command's result.
pub fn outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Done | Outcome::Exit => {}
        Outcome::Listing(entries) => listing(entries),
        Outcome::Digest(digest) => println!("{digest}"),
        Outcome::Host(report) => host_report(report),
    }
}

/// Render a failure. Input mistakes and real failures get distinct
/// lead-ins so a typo doesn't read like a broken filesystem.
pub fn error(err: &EngineError) {
    match err {
        EngineError::Input(_) => {
            println!("{} ({err})", "Invalid input".red());
        }
        _ => {
            println!("{} ({err})", "Operation failed".red());
        }
    }
}

/// Render a directory listing as a Name/Type table.
fn listing(entries: &[DirEntry]) {
    if entries.is_empty() {
        println!("{}", "Directory is empty".green());
        return;
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{:<name_width$}  {}", "Name", "Type");
    println!("{}", "-".repeat(name_width + 6));
    for entry in entries {
        let kind = match entry.kind {
            EntryKind::Directory => "DIR",
            EntryKind::File => "file",
        };
        println!("{:<name_width$}  {kind}", entry.name);
    }
}

/// Render the answer to an `os` query.
fn host_report(report: &HostReport) {
    match report {
        HostReport::Eol(eol) => {
            println!("System EOL: {}", format!("{eol:?}").blue());
        }
        HostReport::Cpus(cpus) => {
            println!("CPUs amount: {}", cpus.len().to_string().blue());
            cpu_table(cpus);
        }
        HostReport::HomeDir(dir) => {
            println!("System homedir: {}", dir.display().to_string().blue());
        }
        HostReport::Username(name) => {
            println!("System username: {}", name.clone().blue());
        }
        HostReport::Architecture(arch) => {
            println!("System architecture: {}", (*arch).blue());
        }
    }
}

/// Render the per-CPU model/speed table.
fn cpu_table(cpus: &[CpuInfo]) {
    let model_width = cpus
        .iter()
        .map(|c| c.model.len())
        .max()
        .unwrap_or(5)
        .max(5);

    println!("{:<model_width$}  {:>11}", "Model", "Speed (MHz)");
    println!("{}", "-".repeat(model_width + 13));
    for cpu in cpus {
        println!("{:<model_width$}  {:>11}", cpu.model, cpu.frequency_mhz);
    }
}
