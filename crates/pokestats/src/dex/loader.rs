use futures::future::try_join_all;
use log::debug;
use pokestats_core::pokemon::{normalize_pokemon, Pokemon};
use serde_json::Value;
use std::future::Future;
use tokio::sync::Semaphore;

use crate::error::Error;

/// Fetch and normalize every locator concurrently.
///
/// At most `concurrency` requests are in flight at once. The result keeps
/// the order of `locators`. The first failure ends the whole load and the
/// requests still pending are dropped.
pub async fn load_details<F, Fut>(
    locators: &[String],
    concurrency: usize,
    fetch: F,
) -> Result<Vec<Pokemon>, Error>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Value, Error>>,
{
    let permits = concurrency.max(1);
    debug!(
        "Loading {} details with at most {} in flight",
        locators.len(),
        permits
    );

    let semaphore = Semaphore::new(permits);
    let fetch = &fetch;
    let semaphore = &semaphore;

    let tasks = locators.iter().enumerate().map(|(index, locator)| async move {
        // Held until this request finishes; the semaphore is never closed.
        let _permit = semaphore.acquire().await;
        debug!("Fetching detail {index}: {locator}");

        let raw = fetch(locator.clone()).await?;
        Ok::<_, Error>(normalize_pokemon(&raw)?)
    });

    try_join_all(tasks).await
}
