use pokestats_core::pokemon::MalformedRecordError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to reach {url}: {message}")]
    Transport { url: String, message: String },

    #[error("{}", upstream_status_message(.status, .locator))]
    UpstreamStatus { status: u16, locator: Option<String> },

    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
}

fn upstream_status_message(status: &u16, locator: &Option<String>) -> String {
    match locator {
        Some(locator) => format!("Upstream returned HTTP {status} for {locator}"),
        None => format!("Upstream returned HTTP {status} while listing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_with_locator() {
        let err = Error::UpstreamStatus {
            status: 404,
            locator: Some("https://pokeapi.co/api/v2/pokemon/99999/".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "Upstream returned HTTP 404 for https://pokeapi.co/api/v2/pokemon/99999/"
        );
    }

    #[test]
    fn test_upstream_status_message_listing() {
        let err = Error::UpstreamStatus {
            status: 503,
            locator: None,
        };

        assert_eq!(err.to_string(), "Upstream returned HTTP 503 while listing");
    }

    #[test]
    fn test_malformed_record_is_transparent() {
        let inner = MalformedRecordError {
            record: "mew".to_string(),
            field: "weight",
            problem: "is missing".to_string(),
        };
        let err: Error = inner.clone().into();

        assert_eq!(err.to_string(), inner.to_string());
    }
}
