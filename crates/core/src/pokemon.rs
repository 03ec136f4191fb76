use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lightweight listing entry returned by `/pokemon?limit=N`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PokemonRef {
    pub name: String,
    /// Locator of the detail resource
    pub url: String,
}

/// Listing payload from the API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<PokemonRef>,
}

/// Normalized Pokémon detail
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u64,
    pub name: String,
    pub height: u64,
    /// Weight in decagrams
    pub weight: u64,
    /// Primary type first
    pub types: Vec<String>,
    pub base_experience: u64,
}

impl Pokemon {
    /// Weight converted from decagrams to kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight as f64 / 10.0
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }
}

/// A detail record that is missing a field the API guarantees
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed record {record}: field `{field}` {problem}")]
pub struct MalformedRecordError {
    /// Record name or id when it could be read, otherwise "<unknown>"
    pub record: String,
    pub field: &'static str,
    pub problem: String,
}

impl MalformedRecordError {
    fn missing(record: &str, field: &'static str) -> Self {
        Self {
            record: record.to_string(),
            field,
            problem: "is missing".to_string(),
        }
    }

    fn invalid(record: &str, field: &'static str, expected: &str) -> Self {
        Self {
            record: record.to_string(),
            field,
            problem: format!("is not {expected}"),
        }
    }
}

fn record_label(raw: &Value) -> String {
    match (raw.get("name").and_then(Value::as_str), raw.get("id")) {
        (Some(name), _) => name.to_string(),
        (None, Some(id)) if !id.is_null() => id.to_string(),
        _ => "<unknown>".to_string(),
    }
}

fn required_u64(
    raw: &Value,
    field: &'static str,
    label: &str,
) -> Result<u64, MalformedRecordError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(MalformedRecordError::missing(label, field)),
        Some(value) => value
            .as_u64()
            .ok_or_else(|| MalformedRecordError::invalid(label, field, "a non-negative integer")),
    }
}

/// Convert a raw detail record into a [`Pokemon`]
///
/// `id`, `name`, `height` and `weight` are required. A missing or null
/// `base_experience` becomes `0`. Type names are read from
/// `types[].type.name` in the order the API lists them.
pub fn normalize_pokemon(raw: &Value) -> Result<Pokemon, MalformedRecordError> {
    let label = record_label(raw);

    if !raw.is_object() {
        return Err(MalformedRecordError::invalid(&label, "record", "an object"));
    }

    let id = required_u64(raw, "id", &label)?;
    let name = match raw.get("name") {
        None | Some(Value::Null) => return Err(MalformedRecordError::missing(&label, "name")),
        Some(value) => value
            .as_str()
            .ok_or_else(|| MalformedRecordError::invalid(&label, "name", "a string"))?
            .to_string(),
    };
    let height = required_u64(raw, "height", &label)?;
    let weight = required_u64(raw, "weight", &label)?;

    let base_experience = match raw.get("base_experience") {
        None | Some(Value::Null) => 0,
        Some(value) => value.as_u64().ok_or_else(|| {
            MalformedRecordError::invalid(&label, "base_experience", "a non-negative integer")
        })?,
    };

    let types = match raw.get("types") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(slots)) => slots
            .iter()
            .map(|slot| {
                slot.get("type")
                    .and_then(|t| t.get("name"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        MalformedRecordError::invalid(&label, "types", "a list of {type: {name}}")
                    })
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(MalformedRecordError::invalid(&label, "types", "a list")),
    };

    Ok(Pokemon {
        id,
        name,
        height,
        weight,
        types,
        base_experience,
    })
}
