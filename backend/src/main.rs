use anyhow::{Context, Result};
use log::{error, info};
use std::io::{self, BufRead, Write};

use charity_tracker::domain::commands::Confirmation;
use charity_tracker::io::{LedgerController, Presenter};
use charity_tracker::Backend;

/// Presenter that talks to the user over stdin/stdout
struct TerminalPresenter;

impl TerminalPresenter {
    fn read_line(&self, label: &str) -> Option<String> {
        print!("{}", label);
        if io::stdout().flush().is_err() {
            return None;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                error!("Failed to read input: {}", e);
                None
            }
        }
    }
}

impl Confirmation for TerminalPresenter {
    fn confirm(&self, prompt: &str) -> bool {
        matches!(
            self.read_line(&format!("{} [y/N]: ", prompt)).as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        )
    }
}

impl Presenter for TerminalPresenter {
    fn notify(&self, title: &str, message: &str) {
        println!("\n[{}]\n{}\n", title, message);
    }

    fn warn(&self, title: &str, message: &str) {
        println!("\n[!] {}\n{}\n", title, message);
    }
}

const MENU: &str = "\
=== Charity Donation Tracker ===
 1) Add Donor
 2) Record Donation
 3) View Donors
 4) Generate Report
 5) Delete Specific Donor
 6) Delete All Data
 0) Quit";

fn print_donors(rows: &[shared::DonorSummaryRow]) {
    if rows.is_empty() {
        println!("\nNo donors yet.\n");
        return;
    }

    println!("\n{:<25} {:<25} {:>15}", "Name", "Contact", "Total Donated");
    for row in rows {
        println!("{:<25} {:<25} {:>15}", row.name, row.contact, row.total_donated);
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Charity Tracker");

    let backend = Backend::new().context("Failed to open the charity tracker data directory")?;
    println!("Data directory: {}", backend.data_directory.display());
    let controller = LedgerController::new(backend.ledger, TerminalPresenter);

    loop {
        println!("{}", MENU);
        let Some(choice) = controller.presenter().read_line("> ") else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(name) = controller.presenter().read_line("Donor Name: ") else { break };
                let Some(contact) = controller.presenter().read_line("Contact: ") else { break };
                controller.add_donor(&name, &contact);
            }
            "2" => {
                let Some(name) = controller.presenter().read_line("Donor Name: ") else { break };
                let Some(amount) = controller.presenter().read_line("Amount: ") else { break };
                controller.record_donation(&name, &amount);
            }
            "3" => print_donors(&controller.refresh_donor_list()),
            "4" => {
                controller.generate_report();
            }
            "5" => {
                let Some(name) = controller.presenter().read_line("Donor Name: ") else { break };
                controller.delete_donor(&name);
            }
            "6" => {
                controller.delete_all_data();
            }
            "0" | "q" | "quit" => break,
            other => println!("Unknown option: {}", other),
        }
    }

    info!("Charity Tracker closed");
    Ok(())
}
