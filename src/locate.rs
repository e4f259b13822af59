//! Finding and reading the .ics file to inspect.

use anyhow::{Context, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// The platform download directory, or ~/downloads when it is unknown.
pub fn download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Append the .ics extension unless the name already has it.
pub fn ics_filename(name: &str) -> String {
    if name.ends_with(".ics") {
        name.to_string()
    } else {
        format!("{}.ics", name)
    }
}

/// Input with a `/` is taken as a path; anything else is a file name inside
/// `search_dir`.
pub fn resolve_input(input: &str, search_dir: &Path) -> PathBuf {
    if input.contains('/') {
        PathBuf::from(input)
    } else {
        search_dir.join(ics_filename(input))
    }
}

/// Ask for a file until the answer resolves to an existing file.
pub fn prompt_for_path(search_dir: &Path) -> Result<PathBuf> {
    println!(
        "Enter the file path for the .ics file. Bare names are looked up in {}.",
        search_dir.display()
    );

    loop {
        let input: String = Input::new().with_prompt("File name").interact_text()?;
        let path = resolve_input(input.trim(), search_dir);

        if path.is_file() {
            return Ok(path);
        }

        eprintln!("{}", format!("{} is not a valid .ics file.", path.display()).red());
    }
}

/// Read the whole file into memory, one entry per line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let lines: Vec<String> = contents.lines().map(String::from).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "Read calendar file");

    Ok(lines)
}
