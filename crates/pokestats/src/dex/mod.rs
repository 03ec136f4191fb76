use crate::prelude::{eprintln, *};

pub mod client;
pub mod list;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod show;

#[cfg(test)]
pub mod test_support;

pub use client::{DexClient, PokeApi, POKEAPI_BASE};
pub use pipeline::{run_pipeline, Phase};

/// Build the HTTP client for the configured API base
pub fn create_client(global: &crate::Global) -> Result<DexClient> {
    let client = DexClient::new(&global.base_url)?;

    if global.verbose {
        eprintln!("PokeAPI base: {}", client.base_url());
    }

    Ok(client)
}
