use crate::core::ConvertOptions;
use crate::error::{RedtableError, RedtableResult};
use crate::excel::SheetReader;
use crate::writer::{write_output, OutputTarget};
use colored::Colorize;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

/// Read a sheet and convert it to Redmine markup
pub fn convert_file(
    file: &Path,
    sheet: Option<&str>,
    options: &ConvertOptions,
) -> RedtableResult<String> {
    let grid = SheetReader::new(file).read(sheet)?;
    crate::core::convert(grid, options)
}

/// Execute the convert command
pub fn convert(
    file: PathBuf,
    out: Option<PathBuf>,
    sheet: Option<String>,
    options: ConvertOptions,
    watch: bool,
) -> RedtableResult<()> {
    if watch {
        return watch_file(&file, out.as_deref(), sheet.as_deref(), &options);
    }
    run_conversion(&file, out.as_deref(), sheet.as_deref(), &options)
}

/// Convert once and deliver the result. Status lines are printed only when
/// the markup goes to a file, so stdout stays pure markup otherwise.
fn run_conversion(
    file: &Path,
    out: Option<&Path>,
    sheet: Option<&str>,
    options: &ConvertOptions,
) -> RedtableResult<()> {
    let markup = convert_file(file, sheet, options)?;
    write_output(&markup, OutputTarget::from_option(out))?;

    if let Some(out) = out {
        println!("{}", "✅ Conversion complete".bold().green());
        println!("   Input:  {}", file.display());
        println!("   Output: {}", out.display());
    }
    Ok(())
}

/// Execute the sheets command - list worksheet names
pub fn sheets(file: PathBuf) -> RedtableResult<()> {
    let names = SheetReader::new(&file).sheet_names()?;
    println!("{}", format!("📊 Sheets in {}", file.display()).bold().green());
    for (idx, name) in names.iter().enumerate() {
        let marker = if idx == 0 { " (default)" } else { "" };
        println!("   {}{}", name.bright_blue(), marker.dimmed());
    }
    Ok(())
}

/// Convert on every change to the input file until interrupted
fn watch_file(
    file: &Path,
    out: Option<&Path>,
    sheet: Option<&str>,
    options: &ConvertOptions,
) -> RedtableResult<()> {
    if !file.exists() {
        return Err(RedtableError::Watch(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let canonical_path = file.canonicalize()?;
    let parent_dir = canonical_path
        .parent()
        .ok_or_else(|| RedtableError::Watch("Cannot determine parent directory".to_string()))?;

    let (tx, rx) = channel();

    // Spreadsheet applications write in several steps
    let mut debouncer = new_debouncer(Duration::from_millis(300), tx)
        .map_err(|e| RedtableError::Watch(format!("Failed to create file watcher: {}", e)))?;

    debouncer
        .watcher()
        .watch(parent_dir, RecursiveMode::NonRecursive)
        .map_err(|e| RedtableError::Watch(format!("Failed to watch directory: {}", e)))?;

    eprintln!("{}", "👁️  Redtable - Watch Mode".bold().green());
    eprintln!("   Watching: {}", file.display());
    eprintln!("   Press {} to stop\n", "Ctrl+C".bold().yellow());

    run_watch_action(file, out, sheet, options);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|event| {
                    event.kind == DebouncedEventKind::Any
                        && is_watched_file(&event.path, &canonical_path)
                });
                if relevant {
                    eprintln!(
                        "\n{} {}",
                        "🔄 Change detected at".cyan(),
                        chrono::Local::now().format("%H:%M:%S").to_string().cyan()
                    );
                    run_watch_action(file, out, sheet, options);
                }
            }
            Ok(Err(error)) => {
                tracing::warn!(%error, "watch error");
            }
            Err(e) => {
                tracing::error!(error = %e, "watch channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Failures are reported and the watch keeps running
fn run_watch_action(file: &Path, out: Option<&Path>, sheet: Option<&str>, options: &ConvertOptions) {
    if let Err(e) = run_conversion(file, out, sheet, options) {
        eprintln!("{} {}", "❌ Conversion failed:".bold().red(), e);
    }
}

/// Whether a file-system event concerns the watched workbook. Editors often
/// replace the file, so a matching file name in the watched directory counts.
fn is_watched_file(event_path: &Path, watched: &Path) -> bool {
    if let Ok(event_canonical) = event_path.canonicalize() {
        if event_canonical == watched {
            return true;
        }
    }
    match (event_path.file_name(), watched.file_name()) {
        (Some(name), Some(ours)) => name == ours,
        _ => false,
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
