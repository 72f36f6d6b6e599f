// Entrypoint for the CLI application.
// - Keeps `main` small: create the session and hand it to the UI loop.
// - Returns `anyhow::Result` to keep error handling simple.

use ewaste_cli::{inventory::Session, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // The session owns the fixed credential list and the in-memory item
    // list for the process lifetime. See `inventory::Session::new`.
    let session = Session::new();

    // Start the interactive flow: login first, then the role menu.
    // This call blocks until the user exits.
    main_menu(session)?;
    Ok(())
}
