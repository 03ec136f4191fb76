//! Report construction
//!
//! [`build_report`] runs every aggregation in a fixed order against one
//! collection. [`Report::sections`] turns the result into human-readable
//! line groups for whichever renderer the caller uses.

use serde::Serialize;

use crate::aggregate::{
    all_have_base_experience, any_heavier_than, count_by_type, filter_by_type, find_by_prefix,
    names_upper, sorted_by_name, top_heaviest, weight_stats, TypeCounts, WeightStats,
};
use crate::config::ReportConfig;
use crate::pokemon::Pokemon;

/// Every aggregate view over one loaded collection
#[derive(Debug, Serialize, Clone)]
pub struct Report {
    pub count: usize,
    pub config: ReportConfig,
    pub names: Vec<String>,
    pub filtered: Vec<Pokemon>,
    pub weight_stats: WeightStats,
    pub type_counts: TypeCounts,
    pub found: Option<Pokemon>,
    pub all_have_base_experience: bool,
    pub some_exceed_weight: bool,
    pub heaviest: Vec<Pokemon>,
    pub sorted_by_name: Vec<Pokemon>,
}

/// A titled group of report lines
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

pub fn build_report(pokemon: &[Pokemon], config: &ReportConfig) -> Report {
    Report {
        count: pokemon.len(),
        config: config.clone(),
        names: names_upper(pokemon),
        filtered: filter_by_type(pokemon, &config.type_filter)
            .into_iter()
            .cloned()
            .collect(),
        weight_stats: weight_stats(pokemon),
        type_counts: count_by_type(pokemon),
        found: find_by_prefix(pokemon, &config.search_prefix).cloned(),
        all_have_base_experience: all_have_base_experience(pokemon),
        some_exceed_weight: any_heavier_than(pokemon, config.weight_threshold),
        heaviest: top_heaviest(pokemon, config.top_heaviest)
            .into_iter()
            .cloned()
            .collect(),
        sorted_by_name: sorted_by_name(pokemon, config.top_by_name)
            .into_iter()
            .cloned()
            .collect(),
    }
}

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}

fn format_kg(decagrams: u64) -> String {
    format!("{:.1} kg", decagrams as f64 / 10.0)
}

fn or_none(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec!["(none)".to_string()]
    } else {
        lines
    }
}

fn pokemon_line(p: &Pokemon) -> String {
    format!("#{} {} [{}]", p.id, p.name, p.types.join("/"))
}

impl Report {
    pub fn header(&self) -> String {
        format!("Pokémon report ({} loaded)", self.count)
    }

    /// One section per aggregation, in reporting order
    pub fn sections(&self) -> Vec<ReportSection> {
        let config = &self.config;

        let names = or_none(if self.names.is_empty() {
            vec![]
        } else {
            vec![self.names.join(", ")]
        });

        let filtered = or_none(self.filtered.iter().map(pokemon_line).collect());

        let stats = vec![
            format!(
                "Total: {} ({})",
                self.weight_stats.total,
                format_kg(self.weight_stats.total)
            ),
            format!("Average: {}", self.weight_stats.average),
        ];

        let type_counts = or_none(
            self.type_counts
                .sorted()
                .into_iter()
                .map(|(name, count)| format!("{name}: {count}"))
                .collect(),
        );

        let found = vec![match &self.found {
            Some(p) => pokemon_line(p),
            None => "Not found".to_string(),
        }];

        let heaviest = or_none(
            self.heaviest
                .iter()
                .enumerate()
                .map(|(idx, p)| {
                    format!("{}. {} - {} ({})", idx + 1, p.name, format_kg(p.weight), p.weight)
                })
                .collect(),
        );

        let by_name = or_none(
            self.sorted_by_name
                .iter()
                .enumerate()
                .map(|(idx, p)| format!("{}. {}", idx + 1, p.name))
                .collect(),
        );

        vec![
            ReportSection::new("Names", names),
            ReportSection::new(
                format!("Type \"{}\" ({})", config.type_filter, self.filtered.len()),
                filtered,
            ),
            ReportSection::new("Weight statistics", stats),
            ReportSection::new("Count by type", type_counts),
            ReportSection::new(
                format!("First name starting with \"{}\"", config.search_prefix),
                found,
            ),
            ReportSection::new(
                "All have base experience",
                vec![yes_no(self.all_have_base_experience)],
            ),
            ReportSection::new(
                format!("Any heavier than {}", config.weight_threshold),
                vec![yes_no(self.some_exceed_weight)],
            ),
            ReportSection::new(format!("Top {} by weight", config.top_heaviest), heaviest),
            ReportSection::new(format!("First {} by name", config.top_by_name), by_name),
        ]
    }

    /// Flattened report: the header, then each section title followed by its lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.header()];
        for section in self.sections() {
            lines.push(format!("== {} ==", section.title));
            lines.extend(section.lines);
        }
        lines
    }
}
