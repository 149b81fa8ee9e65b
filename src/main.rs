use crate::error::BookingError;
use crate::fare::{RideType, format_fare};
use crate::ride::BookingResult;
use crate::scenario::{RideRequest, Scenario};
use crate::session::Session;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;

mod booking;
mod customer;
mod dispatch;
mod driver;
mod error;
mod fare;
mod ride;
mod scenario;
mod session;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file, e.g. data/default.json. Without it the built-in demo runs
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Replay the scenario requests and exit
    #[arg(long)]
    batch: bool,

    /// Log every booking step
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) -> io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    pager.wait()?;
    Ok(())
}

/// Splits a command line on whitespace, keeping "double quoted" words together.
fn split_args(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    parts.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        parts.push(current);
    }
    parts
}

fn report(result: &Result<BookingResult, BookingError>) {
    match result {
        Ok(r) if r.is_confirmed() => println!("{}", r.to_string().green()),
        Ok(r) => println!("{}", r.to_string().yellow()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn list_drivers(session: &Session) -> io::Result<()> {
    let drivers = session.service.dispatcher().drivers();
    if drivers.is_empty() {
        println!("No drivers registered.");
        return Ok(());
    }
    let mut table = tabled::Table::new(drivers);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    let summary = format!(
        "{} of {} drivers available",
        session.service.dispatcher().available_count(),
        drivers.len()
    );
    if drivers.len() > 20 {
        paginate(format!("{}\n{}\n", table, summary))
    } else {
        println!("{}\n{}", table, summary);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    let (scenario, source) = match &args.scenario {
        Some(path) => (Scenario::load_from_file(&path.to_string_lossy())?, path.display().to_string()),
        None => (Scenario::demo(), "built-in demo".to_string()),
    };
    let mut session = Session::from_scenario(&scenario)?;
    println!(
        "SwiftRide online. Loaded {} drivers and {} customers from {}",
        scenario.drivers.len(),
        scenario.customers.len(),
        source
    );

    for result in session.replay(&scenario.requests) {
        report(&result);
    }
    if args.batch {
        return Ok(());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "book", "fare", "driver", "customer", "release", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
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

                let parts = split_args(trimmed);
                let words: Vec<&str> = parts.iter().map(String::as_str).collect();
                match words.as_slice() {
                    ["ls"] => list_drivers(&session)?,
                    ["book", customer, pickup, dropoff, distance, ride_type] => {
                        let result = distance
                            .parse::<f64>()
                            .map_err(|_| BookingError::invalid_input(format!("not a distance: {}", distance)))
                            .and_then(|d| session.book(&RideRequest::new(customer, pickup, dropoff, d, ride_type)));
                        report(&result);
                    },
                    ["book", ..] => println!("Usage: book <customer> <pickup> <dropoff> <distance> <type>"),
                    ["fare", ride_type, distance] => {
                        let fare = ride_type.parse::<RideType>().and_then(|t| {
                            distance
                                .parse::<f64>()
                                .map_err(|_| BookingError::invalid_input(format!("not a distance: {}", distance)))
                                .and_then(|d| session.service.estimate_fare(t, d))
                        });
                        match fare {
                            Ok(fare) => println!("Estimated fare: {}", format_fare(fare)),
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    },
                    ["fare", ..] => println!("Usage: fare <type> <distance>"),
                    ["driver", name] => match session.add_driver(name) {
                        Ok(driver) => println!("Registered driver {} ({}).", driver, driver.status()),
                        Err(e) => println!("{}", e.to_string().red()),
                    },
                    ["customer", name] => match session.add_customer(name) {
                        Ok(customer) => println!("Registered customer {}.", customer),
                        Err(e) => println!("{}", e.to_string().red()),
                    },
                    ["release", name] => match session.service.dispatcher_mut().release(name) {
                        Ok(()) => println!("Driver {} is available.", name),
                        Err(e) => println!("{}", e.to_string().red()),
                    },
                    ["driver" | "customer" | "release", ..] => println!("Usage: {} <name>", words[0]),
                    ["help" | "?"] => {
                        println!("\nAvailable Commands:");
                        println!("  ls                             - List drivers and their availability");
                        println!("  book <c> <from> <to> <d> <t>   - Book a ride of type <t> (economy, luxury, pool) over <d> for customer <c>");
                        println!("  fare <t> <d>                   - Estimate the fare of a <t> ride over <d>");
                        println!("  driver <name>                  - Register a driver");
                        println!("  customer <name>                - Register a customer");
                        println!("  release <name>                 - Make an occupied driver available again");
                        println!("  help / ?                       - Show this help menu");
                        println!("  exit / quit                    - Exit\n");
                        println!("Quote arguments containing spaces, e.g. \"Shopping Mall\".\n");
                    },
                    ["exit" | "quit"] => break,
                    _ => println!("Unknown command: {}", words[0]),
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
