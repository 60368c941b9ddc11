//! Session state management for the Pokedex CLI
//!
//! This module contains the session state carried across commands: the
//! pagination cursor for the `map` commands, the set of caught Pokemon, and
//! the API client (which owns the response cache). One method per command,
//! routed through `dispatch`.

use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;

use crate::cache::ResponseCache;
use crate::cli::StartupConfig;
use crate::commands::Command;
use crate::data::{CaughtPokemon, PokeApiClient, PokeApiError, Pokemon};

/// Rolls at or below this value catch the Pokemon
const CATCH_THRESHOLD: u32 = 40;

/// Session state accumulated across commands
pub struct App {
    /// URL of the next location page, once a page has been fetched
    next_url: Option<String>,
    /// URL of the previous location page
    previous_url: Option<String>,
    /// Pokemon caught this session, keyed by name
    pokedex: HashMap<String, CaughtPokemon>,
    /// Location areas fetched per `map` page
    page_limit: u32,
    /// Set by the exit command; the prompt loop checks it after dispatch
    pub should_quit: bool,
    /// PokeAPI client, owner of the response cache
    client: PokeApiClient,
}

impl App {
    /// Creates a new session from validated startup configuration.
    pub fn new(config: StartupConfig) -> Self {
        let cache = ResponseCache::new(config.cache);
        Self::with_client(PokeApiClient::new(cache), config.page_limit)
    }

    /// Creates a new session around an existing API client.
    pub fn with_client(client: PokeApiClient, page_limit: u32) -> Self {
        Self {
            next_url: None,
            previous_url: None,
            pokedex: HashMap::new(),
            page_limit,
            should_quit: false,
            client,
        }
    }

    /// Routes a parsed command to its callback.
    ///
    /// Commands taking an argument print their usage and succeed when it is
    /// missing; returned errors are network or decode failures the prompt
    /// loop prints before continuing.
    pub async fn dispatch(
        &mut self,
        command: Command,
        args: &[String],
    ) -> Result<(), PokeApiError> {
        match command {
            Command::Help => {
                self.command_help();
                Ok(())
            }
            Command::Exit => {
                self.command_exit();
                Ok(())
            }
            Command::Map => self.command_map().await,
            Command::MapBack => self.command_map_back().await,
            Command::Explore => self.command_explore(args).await,
            Command::Catch => self.command_catch(args).await,
            Command::Inspect => {
                self.command_inspect(args);
                Ok(())
            }
            Command::Pokedex => {
                self.command_pokedex();
                Ok(())
            }
        }
    }

    /// Shuts the session down, stopping the cache sweeper.
    pub async fn shutdown(self) {
        self.client.close().await;
    }

    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in Command::all() {
            println!("{}: {}", command.usage(), command.description());
        }
    }

    fn command_exit(&mut self) {
        println!("Closing the Pokedex... Goodbye!");
        self.should_quit = true;
    }

    async fn command_map(&mut self) -> Result<(), PokeApiError> {
        let url = self
            .next_url
            .clone()
            .unwrap_or_else(|| PokeApiClient::location_areas_url(self.page_limit));
        self.show_location_page(&url).await
    }

    async fn command_map_back(&mut self) -> Result<(), PokeApiError> {
        let Some(url) = self.previous_url.clone() else {
            println!("you're on the first page");
            return Ok(());
        };
        self.show_location_page(&url).await
    }

    async fn show_location_page(&mut self, url: &str) -> Result<(), PokeApiError> {
        let page = self.client.location_areas(url).await?;
        self.next_url = page.next;
        self.previous_url = page.previous;
        for location in &page.results {
            println!("{}", location.name);
        }
        Ok(())
    }

    async fn command_explore(&mut self, args: &[String]) -> Result<(), PokeApiError> {
        let Some(name) = args.first() else {
            println!("usage: {}", Command::Explore.usage());
            return Ok(());
        };
        println!("Exploring {name}...");
        let area = self.client.location_area(name).await?;
        println!("Found Pokemon:");
        for encounter in &area.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    async fn command_catch(&mut self, args: &[String]) -> Result<(), PokeApiError> {
        let Some(name) = args.first() else {
            println!("usage: {}", Command::Catch.usage());
            return Ok(());
        };
        println!("Throwing a Pokeball at {name}...");
        let pokemon = self.client.pokemon(name).await?;

        let difficulty = pokemon.base_experience.unwrap_or(0);
        let roll = rand::thread_rng().gen_range(0..=difficulty);
        if is_caught(roll) {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            self.pokedex.insert(
                pokemon.name.clone(),
                CaughtPokemon {
                    pokemon,
                    caught_at: Utc::now(),
                },
            );
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(())
    }

    fn command_inspect(&self, args: &[String]) {
        let Some(name) = args.first() else {
            println!("usage: {}", Command::Inspect.usage());
            return;
        };
        match self.pokedex.get(name) {
            Some(caught) => print_pokemon(&caught.pokemon),
            None => println!("you have not caught that pokemon"),
        }
    }

    fn command_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("Your Pokedex is empty. Go catch some Pokemon!");
            return;
        }
        println!("Your Pokedex:");
        let mut caught: Vec<&CaughtPokemon> = self.pokedex.values().collect();
        caught.sort_by_key(|entry| entry.caught_at);
        for entry in caught {
            println!(
                " - {} (caught {})",
                entry.pokemon.name,
                entry.caught_at.format("%Y-%m-%d %H:%M UTC")
            );
        }
    }
}

/// Whether a catch roll succeeds.
///
/// The roll is drawn from `0..=base_experience`, so a Pokemon whose base
/// experience is at most the threshold is always caught, and tougher
/// Pokemon escape more often the higher their experience yield.
fn is_caught(roll: u32) -> bool {
    roll <= CATCH_THRESHOLD
}

fn print_pokemon(pokemon: &Pokemon) {
    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for ty in &pokemon.types {
        println!("  - {}", ty.kind.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::data::NamedResource;

    fn test_app() -> App {
        let cache = ResponseCache::new(CacheConfig::default());
        App::with_client(PokeApiClient::new(cache), 20)
    }

    fn test_pokemon(name: &str) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: Some(112),
            height: 4,
            weight: 60,
            stats: Vec::new(),
            types: vec![crate::data::PokemonType {
                kind: NamedResource {
                    name: "electric".to_string(),
                    url: "https://pokeapi.co/api/v2/type/13/".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_is_caught_at_threshold_boundaries() {
        assert!(is_caught(0));
        assert!(is_caught(CATCH_THRESHOLD));
        assert!(!is_caught(CATCH_THRESHOLD + 1));
    }

    #[tokio::test]
    async fn test_exit_sets_should_quit() {
        let mut app = test_app();
        assert!(!app.should_quit);

        app.dispatch(Command::Exit, &[])
            .await
            .expect("exit cannot fail");

        assert!(app.should_quit);
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_help_does_not_quit_session() {
        let mut app = test_app();

        app.dispatch(Command::Help, &[])
            .await
            .expect("help cannot fail");

        assert!(!app.should_quit);
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_mapb_on_first_page_does_not_fetch() {
        // No page fetched yet, so previous_url is unset; mapb must succeed
        // without attempting any network I/O.
        let mut app = test_app();

        app.dispatch(Command::MapBack, &[])
            .await
            .expect("mapb on the first page should be a no-op");

        assert!(app.previous_url.is_none());
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_commands_with_missing_argument_print_usage_and_succeed() {
        let mut app = test_app();

        for command in [Command::Explore, Command::Catch, Command::Inspect] {
            app.dispatch(command, &[])
                .await
                .expect("missing argument is not an error");
        }
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_inspect_unknown_pokemon_reports_not_caught() {
        let app = test_app();

        // Not caught: prints the not-caught message, must not panic
        app.command_inspect(&["pikachu".to_string()]);

        assert!(app.pokedex.is_empty());
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_caught_pokemon_is_inspectable() {
        let mut app = test_app();
        app.pokedex.insert(
            "pikachu".to_string(),
            CaughtPokemon {
                pokemon: test_pokemon("pikachu"),
                caught_at: Utc::now(),
            },
        );

        assert!(app.pokedex.contains_key("pikachu"));
        app.command_inspect(&["pikachu".to_string()]);
        app.command_pokedex();
        app.shutdown().await;
    }
}
