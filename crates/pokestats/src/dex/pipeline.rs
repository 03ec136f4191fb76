use log::info;
use pokestats_core::config::{PipelineParams, ReportConfig};
use pokestats_core::report::{build_report, Report};
use std::fmt;

use super::client::PokeApi;
use super::loader::load_details;
use crate::error::Error;

/// Lifecycle notifications emitted before each network phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LoadingList,
    LoadingDetails,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::LoadingList => write!(f, "Loading list..."),
            Phase::LoadingDetails => write!(f, "Loading details..."),
        }
    }
}

/// List, load the first `detail_count` details, then aggregate.
///
/// Any failure ends the run; no partial report is produced.
pub async fn run_pipeline<A: PokeApi>(
    api: &A,
    params: PipelineParams,
    concurrency: usize,
    config: &ReportConfig,
    mut on_status: impl FnMut(Phase),
) -> Result<Report, Error> {
    on_status(Phase::LoadingList);
    info!("Listing up to {} Pokémon", params.limit);
    let refs = api.fetch_list(params.limit).await?;

    let locators: Vec<String> = refs
        .iter()
        .take(params.detail_count)
        .map(|r| r.url.clone())
        .collect();

    on_status(Phase::LoadingDetails);
    info!(
        "Loading {} of {} listed Pokémon",
        locators.len(),
        refs.len()
    );
    let pokemon = load_details(&locators, concurrency, |locator| async move {
        api.fetch_detail(&locator).await
    })
    .await?;

    info!("Building report over {} Pokémon", pokemon.len());
    Ok(build_report(&pokemon, config))
}
