//! Interactive Command Loop
//!
//! The `Pokedex > ` prompt: reads commands from stdin, dispatches them, and
//! keeps the pagination cursors between `map`/`mapb` invocations.

use std::io::{self, Write};

use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;

// == Repl ==
/// The interactive command loop and its pagination state.
pub struct Repl {
    /// API client backed by the shared cache
    client: PokeApiClient,
    /// URL of the next location-area page, once a page has been shown
    next: Option<String>,
    /// URL of the previous location-area page
    previous: Option<String>,
}

impl Repl {
    // == Constructor ==
    /// Creates a REPL with no pages visited yet.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            next: None,
            previous: None,
        }
    }

    // == Run ==
    /// Runs the prompt loop until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O errors
    /// on stdin/stdout abort the loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut input = String::new();
        loop {
            input.clear();
            print!("Pokedex > ");
            io::stdout().flush()?;
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF: behave as if the user typed exit
                println!();
                break;
            }

            let words = clean_input(&input);
            let Some(command) = words.first() else {
                continue;
            };
            debug!("dispatching command: {}", command);

            match command.as_str() {
                "exit" => {
                    println!("Closing the Pokedex... Goodbye!");
                    break;
                }
                "help" => self.print_help(),
                "map" => {
                    if let Err(e) = self.command_map().await {
                        println!("{}", e);
                    }
                }
                "mapb" => {
                    if let Err(e) = self.command_mapb().await {
                        println!("{}", e);
                    }
                }
                _ => println!("Unknown command"),
            }
        }
        Ok(())
    }

    // == Help ==
    fn print_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        println!("Available commands:");
        println!();
        println!("help: Displays a help message");
        println!("exit: Exits the Pokedex");
        println!("map: Displays the names of 20 location areas");
        println!("mapb: Displays the previous 20 location areas");
    }

    // == Map ==
    /// Shows the next page of location areas (the first page initially).
    async fn command_map(&mut self) -> Result<()> {
        let url = match &self.next {
            Some(next) if !next.is_empty() => next.clone(),
            _ => self.client.location_areas_url(),
        };
        self.show_page(&url).await
    }

    // == Map Back ==
    /// Shows the previous page, or says so when already on the first.
    async fn command_mapb(&mut self) -> Result<()> {
        let url = match &self.previous {
            Some(prev) if !prev.is_empty() => prev.clone(),
            _ => {
                println!("you're on the first page");
                return Ok(());
            }
        };
        self.show_page(&url).await
    }

    // == Show Page ==
    /// Fetches a page, updates the cursors, and prints the area names.
    async fn show_page(&mut self, url: &str) -> Result<()> {
        let page = self.client.fetch_location_areas(url).await?;

        self.next = page.next;
        self.previous = page.previous;

        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }
}

// == Input Cleaning ==
/// Lowercases and whitespace-tokenizes one line of user input.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
