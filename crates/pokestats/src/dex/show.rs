use crate::prelude::{println, *};
use colored::Colorize;
use pokestats_core::pokemon::{normalize_pokemon, Pokemon};

use super::{create_client, DexClient, PokeApi};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Pokémon name, national dex number or detail URL (e.g., "pikachu", "25")
    #[clap(env = "POKESTATS_POKEMON")]
    pub pokemon: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Turn user input into a detail locator
fn resolve_locator(client: &DexClient, input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        client.detail_locator(input)
    }
}

/// Fetch and normalize a single Pokémon
pub async fn show_data(input: &str, global: &crate::Global) -> Result<Pokemon> {
    let client = create_client(global)?;
    let locator = resolve_locator(&client, input);
    let raw = client.fetch_detail(&locator).await?;

    Ok(normalize_pokemon(&raw)?)
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let pokemon = show_data(&options.pokemon, &global).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&pokemon)?);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        format!("#{}", pokemon.id).yellow().bold(),
        pokemon.name.white().bold()
    );
    build_table(&pokemon).printstd();

    Ok(())
}

fn build_table(pokemon: &Pokemon) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["Types", pokemon.types.join(", ")]);
    table.add_row(prettytable::row![
        "Height",
        format!("{:.1} m", pokemon.height as f64 / 10.0)
    ]);
    table.add_row(prettytable::row![
        "Weight",
        format!("{:.1} kg ({} dag)", pokemon.weight_kg(), pokemon.weight)
    ]);
    table.add_row(prettytable::row!["Base experience", pokemon.base_experience]);
    table
}
