use crate::card::console_card_printer;
use crate::error::FlightError;
use crate::flight::flight::Flight;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tabled::Tabled;

mod aircraft;
mod card;
mod error;
mod flight;
mod manifest;

#[derive(Parser)]
struct Args {
    /// Path to the JSON boarding manifest
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    manifest: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct BoardedSeat {
    seat: String,
    passenger: String,
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn report(result: Result<(), FlightError>, done: &str) {
    match result {
        Ok(()) => println!("{}", done.green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut flight = manifest::load_from_file(args.manifest.to_str().unwrap())?;
    println!(
        "Gate online. Boarding {} ({}, reg. {}) from {}",
        flight.number(),
        flight.aircraft_model(),
        flight.registration(),
        args.manifest.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "board".to_string(),
            "move".to_string(),
            "free".to_string(),
            "cards".to_string(),
            "info".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let boarded: Vec<BoardedSeat> = flight
                            .passenger_seats()
                            .map(|(passenger, seat)| BoardedSeat {
                                seat,
                                passenger: passenger.to_string(),
                            })
                            .collect();
                        if boarded.is_empty() {
                            println!("No passengers boarded yet.")
                        } else {
                            let mut table = tabled::Table::new(&boarded);
                            table.with(Style::rounded());
                            table.with(tabled::settings::Alignment::left());
                            if boarded.len() > 20 {
                                paginate(table.to_string());
                            } else {
                                println!("{}", table);
                            }
                        }
                    },
                    "board" => {
                        if let (Some(seat), Some(_)) = (parts.get(1), parts.get(2)) {
                            let name = parts[2..].join(" ");
                            report(
                                flight.allocate_seat(seat, name.as_str()),
                                &format!("Boarded {} in seat {}.", name, seat),
                            );
                        } else {
                            println!("Usage: board <seat> <name>");
                        }
                    },
                    "move" => {
                        if let (Some(from), Some(to)) = (parts.get(1), parts.get(2)) {
                            report(
                                flight.relocate_passenger(from, to),
                                &format!("Moved passenger from {} to {}.", from, to),
                            );
                        } else {
                            println!("Usage: move <from_seat> <to_seat>");
                        }
                    },
                    "free" => {
                        println!("{} of {} seats available.", flight.num_available_seats(), flight.num_seats());
                    },
                    "cards" => {
                        flight.make_boarding_cards(console_card_printer);
                    },
                    "info" => {
                        println!("Flight {} (airline {})", flight.number(), flight.airline());
                        println!("Aircraft: {} (reg. {})", flight.aircraft_model(), flight.registration());
                        println!("Seats: {} available / {} total", flight.num_available_seats(), flight.num_seats());
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List boarded passengers and their seats in a table");
                        println!("  board <seat> <name> - Allocate <seat> to passenger <name>");
                        println!("  move <from> <to>    - Relocate the passenger in <from> to seat <to>");
                        println!("  free                - Show how many seats are still available");
                        println!("  cards               - Print boarding cards for everyone on board");
                        println!("  info                - Show flight, aircraft and seat summary");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit the gate agent\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
