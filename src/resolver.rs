//! Natural-language query resolution: raw text goes out to the extraction
//! service, the candidate `{days, districtName}` comes back and is
//! validated against the canonical district list.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::districts::DistrictSet;
use crate::suggest;

/// How many "did you mean" names a rejection carries.
const SUGGESTION_COUNT: usize = 3;

/// Days shown when no query has been resolved yet.
const DEFAULT_DAYS: u32 = 30;

/// The structured candidate returned by the extraction service. `days` is
/// kept as a raw JSON value so that a non-numeric answer is reported as an
/// invalid value rather than a malformed response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExtractedFilter {
    #[serde(default)]
    pub(crate) days: Value,
    #[serde(default, rename = "districtName")]
    pub(crate) district_name: Option<String>,
}

/// The validated outcome a resolution produces. `district` of `None`
/// means "all districts".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedFilter {
    pub(crate) days: u32,
    pub(crate) district: Option<String>,
}

impl Default for ResolvedFilter {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            district: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    Accepted(ResolvedFilter),
    /// The extraction succeeded but the district name is not canonical.
    /// The whole attempt is discarded; `retained` is the prior filter,
    /// unchanged.
    Rejected {
        input: String,
        suggestions: Vec<String>,
        message: String,
        retained: ResolvedFilter,
    },
}

#[derive(Debug, Error)]
pub(crate) enum ResolveError {
    #[error("query text is empty")]
    EmptyQuery,

    /// Network or HTTP failure talking to the extraction service.
    #[error("extraction service call failed: {0}")]
    Service(#[from] reqwest::Error),

    /// The service answered, but not in the shape the contract promises.
    #[error("malformed extraction response: {0}")]
    MalformedResponse(String),

    /// The response was well-formed but `days` is missing, non-numeric,
    /// or not a positive integer. Never retried.
    #[error("invalid `days` in extraction response: {0}")]
    InvalidDays(Value),
}

/// Boundary to the external structured-extraction service. The production
/// implementation wraps the call in the retry policy; tests substitute
/// scripted extractors.
#[async_trait]
pub(crate) trait Extract: Send + Sync {
    async fn extract(&self, query: &str) -> Result<ExtractedFilter, ResolveError>;
}

/// Resolve one natural-language query against the prior filter.
///
/// Accept/reject is atomic: an invalid district discards the extracted
/// `days` too, and the caller keeps `prior` untouched on every outcome
/// except `Accepted`.
pub(crate) async fn resolve<E: Extract + ?Sized>(
    extractor: &E,
    districts: &DistrictSet,
    prior: &ResolvedFilter,
    query: &str,
) -> Result<Resolution, ResolveError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    let extracted = extractor.extract(query).await?;
    let days = validate_days(&extracted.days)?;

    match validate_district(districts, extracted.district_name.as_deref()) {
        DistrictOutcome::NoFilter => Ok(Resolution::Accepted(ResolvedFilter {
            days,
            district: None,
        })),
        DistrictOutcome::Canonical(name) => Ok(Resolution::Accepted(ResolvedFilter {
            days,
            district: Some(name),
        })),
        DistrictOutcome::Unmatched(input) => {
            let suggestions = suggest::best_suggestions(districts, &input, SUGGESTION_COUNT);
            let message = rejection_message(&input, &suggestions);
            Ok(Resolution::Rejected {
                input,
                suggestions,
                message,
                retained: prior.clone(),
            })
        }
    }
}

/// `days` must be a positive integral number; everything else is
/// semantically unusable and fails without a retry.
fn validate_days(value: &Value) -> Result<u32, ResolveError> {
    let invalid = || ResolveError::InvalidDays(value.clone());
    let number = value.as_number().ok_or_else(invalid)?;
    if let Some(days) = number.as_u64() {
        return u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(invalid);
    }
    // The service schema says NUMBER, so `45.0` must count as 45.
    let float = number.as_f64().ok_or_else(invalid)?;
    if float.fract() == 0.0 && float > 0.0 && float <= f64::from(u32::MAX) {
        Ok(float as u32)
    } else {
        Err(invalid())
    }
}

enum DistrictOutcome {
    NoFilter,
    Canonical(String),
    Unmatched(String),
}

fn validate_district(districts: &DistrictSet, name: Option<&str>) -> DistrictOutcome {
    let Some(name) = name else {
        return DistrictOutcome::NoFilter;
    };
    let trimmed = name.trim();
    // The model sometimes answers with the literal string "null".
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return DistrictOutcome::NoFilter;
    }
    match districts.exact_match(trimmed) {
        Some(canonical) => DistrictOutcome::Canonical(canonical.to_string()),
        None => DistrictOutcome::Unmatched(trimmed.to_string()),
    }
}

fn rejection_message(input: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("District name \"**{input}**\" not found. Please check the spelling.")
    } else {
        format!(
            "District name \"**{input}**\" not found. Did you mean: **{}**?",
            suggestions.join("**, **")
        )
    }
}
