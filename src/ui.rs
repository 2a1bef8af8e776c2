// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::ApiClient;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Extensions the extraction service accepts; used to filter the file
/// dialog. Anything else can still be typed in and is rejected server-side.
const INVOICE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf"];

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// simple select loop until the user chooses "Exit".
///
/// Because `submit` blocks until the outcome is rendered, the menu is
/// unreachable while a request is outstanding, so two uploads can never
/// race each other's output.
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(api: ApiClient) -> Result<()> {
    loop {
        let items = vec!["Upload invoice (browse)", "Upload invoice (enter path)", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                // Native file dialog, filtered to the accepted types.
                // Cancelling the dialog counts as "no file selected".
                match pick_file() {
                    Some(path) => {
                        submit(&api, &path);
                    }
                    None => println!("Please select a file"),
                }
            }
            1 => {
                // Typed path for environments without a desktop dialog.
                // An empty answer counts as "no file selected".
                let typed: String = Input::new()
                    .with_prompt("Invoice file path")
                    .allow_empty(true)
                    .interact_text()?;
                if typed.trim().is_empty() {
                    println!("Please select a file");
                } else {
                    submit(&api, Path::new(typed.trim()));
                }
            }
            2 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Submit one invoice: show a spinner while the request is in flight, then
/// render the extracted data or an inline error. Returns whether the upload
/// succeeded, so the non-interactive path can set an exit code.
pub fn submit(api: &ApiClient, path: &Path) -> bool {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Processing invoice...");

    let outcome = api.upload_invoice(path);
    // Cleared exactly once, before any output, whatever the outcome.
    spinner.finish_and_clear();

    match outcome {
        Ok(data) => {
            println!("{}", format_result(&data));
            true
        }
        Err(e) => {
            println!("{}", format_error(&e.to_string()).red());
            false
        }
    }
}

/// Open the native file dialog. Returns `None` when the user cancels or the
/// environment has no dialog support.
fn pick_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Invoices", INVOICE_EXTENSIONS)
        .pick_file()
}

/// Heading plus the pretty-printed extracted data.
fn format_result(data: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    format!("Extracted Data:\n{}", pretty)
}

fn format_error(message: &str) -> String {
    format!("Error: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_rendering_round_trips() {
        let data = json!({"total": 42.5, "items": [{"QUANTITY": 2}]});
        let rendered = format_result(&data);

        assert!(rendered.starts_with("Extracted Data:"));
        assert!(rendered.contains("\"total\": 42.5"));

        let body = rendered.trim_start_matches("Extracted Data:\n");
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn error_rendering_keeps_the_message() {
        assert_eq!(
            format_error("File type not allowed"),
            "Error: File type not allowed"
        );
    }
}
