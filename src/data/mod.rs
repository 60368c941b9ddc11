//! Core data models for the Pokedex CLI
//!
//! This module contains the data types used throughout the application for
//! representing paginated listings, location areas, Pokemon, and the user's
//! caught records.

pub mod pokeapi;

pub use pokeapi::{PokeApiClient, PokeApiError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of results from a paginated PokeAPI listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of resources across all pages
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Resources on this page
    pub results: Vec<T>,
}

/// A resource name plus the canonical URL it can be fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A location area and the Pokemon that can be encountered there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single possible encounter within a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A Pokemon as returned by the `/pokemon/{name}` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Base experience yield; drives catch difficulty. Null for some forms.
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// A base stat value and the stat it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of a Pokemon's types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    /// `type` is a reserved word in Rust, hence the rename
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A caught Pokemon and when it joined the Pokedex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}
