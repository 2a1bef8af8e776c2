// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the prototype.

use invoice_reader_cli::{api::ApiClient, ui};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Create API client configured by environment variable `INVOICE_API_URL`
    // or default to http://localhost:5000. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // A file path argument performs a single upload and exits, so the tool
    // can be scripted. Without one, start the interactive menu.
    if let Some(path) = std::env::args().nth(1) {
        if !ui::submit(&api, &PathBuf::from(path)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Start the interactive menu. This call blocks until the user exits.
    ui::main_menu(api)?;
    Ok(())
}
