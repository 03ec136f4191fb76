//! Aggregate views over a loaded Pokémon collection
//!
//! Every function takes the collection by shared reference and leaves it
//! untouched. Functions that reorder work on a copy of the references.

use serde::Serialize;
use std::collections::HashMap;

use crate::collation::locale_compare;
use crate::pokemon::Pokemon;

pub const DEFAULT_TOP_HEAVIEST: usize = 5;
pub const DEFAULT_TOP_BY_NAME: usize = 10;

/// Total and average weight
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WeightStats {
    pub total: u64,
    /// Average fixed to two decimals; `"NaN"` for an empty collection
    pub average: String,
}

/// Occurrences of each type across the collection
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TypeCounts(pub HashMap<String, usize>);

impl TypeCounts {
    pub fn get(&self, type_name: &str) -> usize {
        self.0.get(type_name).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Descending by count, ties by type name
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Uppercased names, one per entry
pub fn names_upper(pokemon: &[Pokemon]) -> Vec<String> {
    pokemon.iter().map(|p| p.name.to_uppercase()).collect()
}

/// Entries carrying `type_name` among their types, in collection order
pub fn filter_by_type<'a>(pokemon: &'a [Pokemon], type_name: &str) -> Vec<&'a Pokemon> {
    pokemon.iter().filter(|p| p.has_type(type_name)).collect()
}

/// Sum of weights and their mean, halves rounded up at the second decimal
pub fn weight_stats(pokemon: &[Pokemon]) -> WeightStats {
    let total: u64 = pokemon.iter().map(|p| p.weight).sum();
    let count = pokemon.len() as u128;

    let average = if count == 0 {
        "NaN".to_string()
    } else {
        let hundredths = (total as u128 * 200 + count) / (2 * count);
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    };

    WeightStats { total, average }
}

/// A Pokémon with k types adds one to each of k counters
pub fn count_by_type(pokemon: &[Pokemon]) -> TypeCounts {
    let mut counts = HashMap::new();
    for type_name in pokemon.iter().flat_map(|p| p.types.iter()) {
        *counts.entry(type_name.clone()).or_insert(0) += 1;
    }
    TypeCounts(counts)
}

/// First entry, in collection order, whose name starts with `prefix`
pub fn find_by_prefix<'a>(pokemon: &'a [Pokemon], prefix: &str) -> Option<&'a Pokemon> {
    pokemon.iter().find(|p| p.name.starts_with(prefix))
}

/// True when every entry has a positive base experience (vacuously true)
pub fn all_have_base_experience(pokemon: &[Pokemon]) -> bool {
    pokemon.iter().all(|p| p.base_experience > 0)
}

/// True when at least one entry is heavier than `threshold` decagrams
pub fn any_heavier_than(pokemon: &[Pokemon], threshold: u64) -> bool {
    pokemon.iter().any(|p| p.weight > threshold)
}

/// The `n` heaviest entries, heaviest first
///
/// Equal weights keep their collection order.
pub fn top_heaviest(pokemon: &[Pokemon], n: usize) -> Vec<&Pokemon> {
    let mut sorted: Vec<&Pokemon> = pokemon.iter().collect();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
    sorted.truncate(n);
    sorted
}

/// The first `n` entries in locale-aware name order
pub fn sorted_by_name(pokemon: &[Pokemon], n: usize) -> Vec<&Pokemon> {
    let mut sorted: Vec<&Pokemon> = pokemon.iter().collect();
    sorted.sort_by(|a, b| locale_compare(&a.name, &b.name));
    sorted.truncate(n);
    sorted
}
