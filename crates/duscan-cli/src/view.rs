/// Terminal rendering of scan progress and the final report.
///
/// The live view clears the screen and redraws the full subdirectory
/// listing each frame; statuses are colored by state (yellow pending, cyan
/// scanning, green complete, red error). `--plain` turns the colors off via
/// `colored`'s global override.
use colored::Colorize;
use duscan_core::model::{ScanState, StatusRecord};
use duscan_core::render::{ProgressView, StatusRow};
use duscan_core::scanner::ScanReport;
use std::io::{self, Write};
use std::path::Path;

/// Clear the screen and home the cursor.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Live progress view writing to stdout.
pub struct TerminalView;

impl TerminalView {
    pub fn stdout() -> Self {
        Self
    }
}

impl ProgressView for TerminalView {
    fn render(&mut self, root: &Path, rows: &[StatusRow<'_>]) {
        let mut out = io::stdout().lock();
        // Rendering is best-effort; a closed stdout must not panic the
        // render thread.
        let _ = write!(out, "{CLEAR}");
        let _ = writeln!(out, "Scanning: {}", root.display());
        let _ = writeln!(out, "Size calculation in progress...");
        let _ = writeln!(out);
        for row in rows {
            let _ = writeln!(out, "|- ({}) {}", status_text(row.record.as_ref()), row.name);
        }
        let _ = out.flush();
    }
}

/// Color a status record by state; an unobserved path renders as pending.
fn status_text(record: Option<&StatusRecord>) -> String {
    match record {
        None => "Pending...".yellow().to_string(),
        Some(r) => {
            let msg = r.message.as_str();
            match r.state {
                ScanState::Pending => msg.yellow(),
                ScanState::Scanning => msg.cyan(),
                ScanState::Complete => msg.green(),
                ScanState::Error => msg.red(),
            }
            .to_string()
        }
    }
}

/// Replace the live view with the final, static report.
pub fn print_final_report(report: &ScanReport) {
    print!("{CLEAR}");
    println!("Complete scan results for: {}", report.root.display());
    println!(
        "Total size: {}",
        duscan_core::model::size::format_size(report.total_bytes).green()
    );
    for row in &report.rows {
        let msg = row.message.as_str();
        let colored_msg = match row.state {
            ScanState::Pending => msg.yellow(),
            ScanState::Scanning => msg.cyan(),
            ScanState::Complete => msg.green(),
            ScanState::Error => msg.red(),
        };
        println!("|- ({colored_msg}) {}", row.name);
    }
}

/// Report a root that could not be listed at all.
pub fn print_root_denied(path: &Path) {
    println!(
        "{} {}",
        "Error accessing the root directory:".red(),
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn record(state: ScanState, message: &str) -> StatusRecord {
        StatusRecord {
            state,
            message: CompactString::new(message),
        }
    }

    #[test]
    fn absent_record_renders_as_pending() {
        colored::control::set_override(false);
        assert_eq!(status_text(None), "Pending...");
    }

    #[test]
    fn status_text_uses_the_record_message() {
        colored::control::set_override(false);
        let r = record(ScanState::Complete, "1.00 KB");
        assert_eq!(status_text(Some(&r)), "1.00 KB");
        let r = record(ScanState::Error, "Access Denied");
        assert_eq!(status_text(Some(&r)), "Access Denied");
    }
}
