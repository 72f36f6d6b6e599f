// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive tracker.
//
// Module responsibilities:
// - `inventory`: In-memory session state (fixed credential list, the
//   e-waste item list, the logged-in user) and the operations the menus
//   dispatch to. No terminal I/O lives here.
// - `ui`: Implements the terminal-based flows (login, per-role menus,
//   item entry) and delegates all state changes to `inventory`.
//
// Keeping this separation makes it possible to drive every inventory
// operation from tests without a terminal attached.
pub mod inventory;
pub mod ui;
