//! Line-oriented terminal form over the front desk commands.
//!
//! The form only collects fields and prints whatever status text the command
//! layer returns.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::commands;
use crate::desk::FrontDesk;
use crate::models::{BookingInput, RoomCategory};
use crate::settings::DeskSettings;

const MENU: &str = "\
Hotel Reservation System
  1) Search rooms
  2) Book room
  3) Simulate payment
  4) View reservations
  5) Cancel reservation
  6) Save data
  7) Load data
  q) Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Search,
    Book,
    Pay,
    View,
    Cancel,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<MenuChoice> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "search" => Some(MenuChoice::Search),
            "2" | "book" => Some(MenuChoice::Book),
            "3" | "pay" => Some(MenuChoice::Pay),
            "4" | "view" => Some(MenuChoice::View),
            "5" | "cancel" => Some(MenuChoice::Cancel),
            "6" | "save" => Some(MenuChoice::Save),
            "7" | "load" => Some(MenuChoice::Load),
            "q" | "quit" | "exit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    default_check_in: String,
    default_check_out: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: &DeskSettings) -> Self {
        Self {
            input,
            output,
            default_check_in: settings.default_check_in.clone(),
            default_check_out: settings.default_check_out.clone(),
        }
    }

    /// Serve commands until the user quits or input runs out.
    pub fn run(&mut self, desk: &mut FrontDesk) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(raw) = self.prompt("> ")? else {
                return Ok(());
            };
            if raw.trim().is_empty() {
                continue;
            }

            let Some(choice) = MenuChoice::parse(&raw) else {
                writeln!(self.output, "Unknown option '{}'. Pick 1-7 or q.", raw.trim())?;
                continue;
            };

            let status = match choice {
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Search => self.search(desk)?,
                MenuChoice::Book => self.book(desk)?,
                MenuChoice::Pay => self
                    .prompt("Reservation # for payment: ")?
                    .map(|id| commands::record_payment(desk, &id)),
                MenuChoice::View => Some(commands::view_reservations(desk)),
                MenuChoice::Cancel => self
                    .prompt("Reservation # to cancel: ")?
                    .map(|id| commands::cancel_reservation(desk, &id)),
                MenuChoice::Save => Some(commands::save_data(desk)),
                MenuChoice::Load => Some(commands::load_data(desk)),
            };

            match status {
                Some(text) => writeln!(self.output, "\n{text}\n")?,
                None => return Ok(()),
            }
        }
    }

    fn search(&mut self, desk: &FrontDesk) -> Result<Option<String>> {
        let options: Vec<String> = RoomCategory::ALL
            .iter()
            .enumerate()
            .map(|(idx, category)| format!("{}) {}", idx + 1, category))
            .collect();
        let Some(raw) = self.prompt(&format!("Category [{}]: ", options.join(", ")))? else {
            return Ok(None);
        };

        // A menu number selects from the list; anything else is a name.
        let category = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| RoomCategory::ALL.get(idx).copied())
            .map(|category| category.as_str().to_string())
            .unwrap_or(raw);

        Ok(Some(commands::search_rooms(desk, &category)))
    }

    fn book(&mut self, desk: &mut FrontDesk) -> Result<Option<String>> {
        let Some(customer_name) = self.prompt("Name: ")? else {
            return Ok(None);
        };
        let Some(room_number) = self.prompt("Room #: ")? else {
            return Ok(None);
        };
        let check_in_default = self.default_check_in.clone();
        let Some(check_in) = self.prompt_with_default("Check-in (yyyy-mm-dd)", &check_in_default)?
        else {
            return Ok(None);
        };
        let check_out_default = self.default_check_out.clone();
        let Some(check_out) =
            self.prompt_with_default("Check-out (yyyy-mm-dd)", &check_out_default)?
        else {
            return Ok(None);
        };

        let input = BookingInput {
            customer_name,
            room_number,
            check_in,
            check_out,
        };
        Ok(Some(commands::book_room(desk, &input)))
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_with_default(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        let answer = self.prompt(&format!("{label} [{default}]: "))?;
        Ok(answer.map(|value| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(script: &str, desk: &mut FrontDesk) -> String {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(script.as_bytes()), &mut output, &DeskSettings::default());
        console.run(desk).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn desk_in(dir: &std::path::Path) -> FrontDesk {
        FrontDesk::new(DataStore::new(dir.join("rooms.json"), dir.join("reservations.json")))
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Book));
        assert_eq!(MenuChoice::parse("CANCEL"), Some(MenuChoice::Cancel));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("8"), None);
    }

    #[test]
    fn booking_uses_default_dates() {
        let dir = tempdir().unwrap();
        let mut desk = desk_in(dir.path());
        let out = run_script("2\nAlice\n101\n\n\nq\n", &mut desk);

        assert!(out.contains("Reservation successful! Your reservation #: 1"));
        let rsvp = desk.ledger().get(1).unwrap();
        assert_eq!(rsvp.check_in, "2025-07-01");
        assert_eq!(rsvp.check_out, "2025-07-02");
    }

    #[test]
    fn search_by_menu_number() {
        let dir = tempdir().unwrap();
        let mut desk = desk_in(dir.path());
        let out = run_script("1\n2\n", &mut desk);

        assert!(out.contains("Available Deluxe rooms:"));
        assert!(out.contains("Room 201 (Deluxe), $150.0 [Available]"));
    }

    #[test]
    fn unknown_option_is_reported() {
        let dir = tempdir().unwrap();
        let mut desk = desk_in(dir.path());
        let out = run_script("launch\nq\n", &mut desk);
        assert!(out.contains("Unknown option 'launch'"));
    }

    #[test]
    fn input_ending_mid_form_stops_quietly() {
        let dir = tempdir().unwrap();
        let mut desk = desk_in(dir.path());
        let out = run_script("2\nAlice\n", &mut desk);
        assert!(!out.contains("Reservation successful"));
        assert!(desk.ledger().is_empty());
    }
}
