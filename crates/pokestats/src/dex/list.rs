use crate::prelude::{println, *};
use pokestats_core::config::{resolve_count, DEFAULT_LIMIT};
use pokestats_core::pokemon::PokemonRef;
use serde::Serialize;

use super::{create_client, PokeApi};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Number of Pokémon to list
    #[arg(short, long, env = "POKESTATS_LIMIT")]
    pub limit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub limit: usize,
    pub results: Vec<PokemonRef>,
}

/// Fetch one page of references
pub async fn list_data(limit: usize, global: &crate::Global) -> Result<ListOutput> {
    let client = create_client(global)?;
    let results = client.fetch_list(limit).await?;

    Ok(ListOutput { limit, results })
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let limit = resolve_count(options.limit.as_deref(), DEFAULT_LIMIT);
    let data = list_data(limit, &global).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("Found {} Pokémon:\n", data.results.len());

    if data.results.is_empty() {
        println!("No Pokémon found.");
        return Ok(());
    }

    build_table(&data.results).printstd();

    Ok(())
}

fn build_table(results: &[PokemonRef]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Name", "URL"]);

    for (idx, pokemon) in results.iter().enumerate() {
        table.add_row(prettytable::row![idx + 1, &pokemon.name, &pokemon.url]);
    }

    table
}
