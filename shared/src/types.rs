//! Common types for the shared crate

/// Multi-field search combination policy.
///
/// `Union` reproduces the legacy behavior: each field filter runs
/// independently against the full collection and the results are
/// concatenated, so a record matching several filters appears once per
/// match. `Intersect` runs a single conjunctive query instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Union,
    Intersect,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "union" => Ok(SearchMode::Union),
            "intersect" => Ok(SearchMode::Intersect),
            other => Err(format!("invalid search mode: {other}")),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Union => write!(f, "union"),
            SearchMode::Intersect => write!(f, "intersect"),
        }
    }
}
