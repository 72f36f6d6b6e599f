// UI layer: provides the interactive login and menu flows using
// `dialoguer`. The functions are small and synchronous to make the flow
// easy to follow; every state change goes through `inventory::Session`.

use crate::inventory::{Item, Role, Session};
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// One menu entry: a label shown in the `Select` list and the handler it
/// dispatches to. Each role gets its own ordered table, so a choice is
/// always unambiguous — there are no shared option numbers to overload.
struct Command {
    label: &'static str,
    run: fn(&mut Session) -> Result<()>,
}

const ADMIN_MENU: &[Command] = &[
    Command { label: "Add E-Waste Item", run: handle_add },
    Command { label: "View E-Waste Items", run: handle_view },
    Command { label: "Recycle an Item", run: handle_recycle },
    Command { label: "Generate Report", run: handle_report },
    Command { label: "Schedule Collection", run: handle_schedule },
];

const STANDARD_MENU: &[Command] = &[
    Command { label: "View E-Waste Items", run: handle_view },
    Command { label: "Generate Report", run: handle_report },
];

/// Main interactive flow. Receives the `Session` and blocks until the
/// user exits: one login attempt first, then the role's menu loop.
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option, so an out-of-range choice cannot
/// happen. A failed login returns normally; there is no retry.
pub fn main_menu(mut session: Session) -> Result<()> {
    let Some(role) = handle_login(&mut session)? else {
        println!("Authentication failed. Exiting...");
        return Ok(());
    };

    let commands = match role {
        Role::Admin => ADMIN_MENU,
        Role::Standard => STANDARD_MENU,
    };

    loop {
        println!("\n--- E-Waste Monitoring System ---");
        let mut labels: Vec<&str> = commands.iter().map(|c| c.label).collect();
        labels.push("Exit");
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&labels)
            .default(0)
            .interact()?;
        if selection == commands.len() {
            println!("Exiting the system...");
            break;
        }
        (commands[selection].run)(&mut session)?;
    }
    Ok(())
}

/// Collect credentials and attempt the single login, returning the role
/// on success and `None` on a miss (the caller terminates).
fn handle_login(session: &mut Session) -> Result<Option<Role>> {
    let username: String = Input::new().with_prompt("Enter Username").interact_text()?;
    let password: String = Password::new().with_prompt("Enter Password").interact()?;

    // show spinner for UX while the credential check "runs"
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Logging in...");
    thread::sleep(Duration::from_millis(300));
    spinner.finish_and_clear();

    match session.login(&username, &password) {
        Ok(user) => {
            println!(
                "{}",
                format!("Login successful! Welcome, {}", user.username).green()
            );
            Ok(Some(user.role))
        }
        Err(e) => {
            println!("{}", e.to_string().red());
            Ok(None)
        }
    }
}

/// Collect the item fields and append the new record. The years prompt
/// is typed, so a non-numeric entry re-asks instead of aborting.
fn handle_add(session: &mut Session) -> Result<()> {
    let name: String = Input::new().with_prompt("Enter Item Name").interact_text()?;
    let category: String = Input::new()
        .with_prompt("Enter Item Type (e.g., Laptop, Phone)")
        .interact_text()?;
    let years: u32 = Input::new()
        .with_prompt("Enter Years in Use")
        .interact_text()?;

    session.add_item(&name, &category, years);
    println!("{}", "E-Waste item added successfully.".green());
    Ok(())
}

/// Sub-menu over the three listing modes: everything in current order,
/// everything after a permanent sort by years in use, or a read-only
/// filter by type. Skipped entirely when the list is empty.
fn handle_view(session: &mut Session) -> Result<()> {
    if session.is_empty() {
        println!("No E-Waste items to display.");
        return Ok(());
    }

    println!("\n--- E-Waste Items ---");
    let modes = vec!["View All Items", "Sort by Years in Use", "View by Type"];
    let choice = Select::new()
        .with_prompt("Choose an option")
        .items(&modes)
        .default(0)
        .interact()?;
    match choice {
        0 => {
            for item in session.items() {
                print_item(item);
            }
        }
        1 => {
            // The sort mutates the stored order; later listings keep it.
            session.sort_by_years();
            for item in session.items() {
                print_item(item);
            }
        }
        2 => {
            let category: String = Input::new()
                .with_prompt("Enter Type to Filter (e.g., Laptop, Phone)")
                .interact_text()?;
            for item in session.items_by_category(&category) {
                print_item(item);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Prompt for a name and mark the first unrecycled match. A miss (no
/// such name, or every match already recycled) leaves the list alone.
fn handle_recycle(session: &mut Session) -> Result<()> {
    if session.is_empty() {
        println!("No E-Waste items to recycle.");
        return Ok(());
    }

    let name: String = Input::new()
        .with_prompt("Enter the name of the item to recycle")
        .interact_text()?;
    match session.recycle(&name) {
        Ok(()) => println!("{}", "Item recycled successfully.".green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Print the three summary counters, or the empty-list notice.
fn handle_report(session: &mut Session) -> Result<()> {
    match session.report() {
        Some(report) => {
            println!("\n--- E-Waste Report ---");
            println!("Total E-Waste Items: {}", report.total);
            println!("Recycled Items: {}", report.recycled);
            println!("Pending for Recycling: {}", report.pending);
            println!("---------------------------");
        }
        None => println!("No E-Waste items to report."),
    }
    Ok(())
}

/// Prompt for a name, and only once it is known to exist prompt for the
/// date. Re-scheduling the same name silently overwrites the old date.
fn handle_schedule(session: &mut Session) -> Result<()> {
    if session.is_empty() {
        println!("No E-Waste items to schedule.");
        return Ok(());
    }

    let name: String = Input::new()
        .with_prompt("Enter the name of the item to schedule collection")
        .interact_text()?;
    if !session.contains(&name) {
        println!("{}", "Item not found.".red());
        return Ok(());
    }

    let date: String = Input::new()
        .with_prompt("Enter Collection Date (e.g., 2024-08-20)")
        .interact_text()?;
    match session.schedule(&name, &date) {
        Ok(()) => println!(
            "{}",
            format!("Collection scheduled successfully for {}", date).green()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Five-line record block used by every listing mode.
fn print_item(item: &Item) {
    println!("Item: {}", item.name);
    println!("Type: {}", item.category);
    println!("Years in Use: {}", item.years_in_use);
    println!("Recycled: {}", if item.recycled { "Yes" } else { "No" });
    println!("Collection Date: {}", item.collection_date);
    println!("---------------------------");
}
