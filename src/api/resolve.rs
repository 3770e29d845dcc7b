use std::sync::Arc;

use async_graphql::{Context, Object, Result, SimpleObject};
use tracing::{info, warn};

use crate::api::CurrentFilter;
use crate::districts::DistrictSet;
use crate::resolver::{self, Extract, Resolution, ResolveError};

/// Shown when the extraction call fails outright (exhausted retries or an
/// unusable `days` value).
const FAILURE_MESSAGE: &str = "Sorry, I couldn't understand that query. Please try again.";

#[derive(SimpleObject)]
struct FilterView {
    /// Timeframe in days.
    days: u64,

    /// Canonical district name, or null for all districts.
    district: Option<String>,
}

#[derive(SimpleObject)]
struct ResolveResult {
    /// Whether the query produced a new active filter.
    accepted: bool,

    /// The filter now in effect: the new one on acceptance, the prior one
    /// otherwise.
    filter: FilterView,

    /// User-facing explanation when `accepted` is false.
    message: Option<String>,

    /// Up to 3 "did you mean" district names for an unmatched input.
    suggestions: Vec<String>,
}

#[derive(Default)]
pub(super) struct FilterQuery {}

#[Object]
impl FilterQuery {
    /// The filter currently applied to the dashboard.
    #[allow(clippy::unused_async)]
    async fn current_filter(&self, ctx: &Context<'_>) -> Result<FilterView> {
        let current = ctx.data::<CurrentFilter>()?.get();
        Ok(FilterView {
            days: u64::from(current.days),
            district: current.district,
        })
    }
}

#[derive(Default)]
pub(super) struct ResolveMutation {}

#[Object]
impl ResolveMutation {
    /// Resolve one natural-language query (typed or a voice transcript)
    /// into a dashboard filter. On acceptance the current filter is
    /// replaced; on rejection or failure it stays as it was.
    async fn resolve_query(&self, ctx: &Context<'_>, query: String) -> Result<ResolveResult> {
        let districts = ctx.data::<DistrictSet>()?;
        let extractor = ctx.data::<Arc<dyn Extract>>()?;
        let current = ctx.data::<CurrentFilter>()?;

        let prior = current.get();
        match resolver::resolve(extractor.as_ref(), districts, &prior, &query).await {
            Ok(Resolution::Accepted(filter)) => {
                info!(
                    "query resolved to {} days, district {:?}",
                    filter.days, filter.district
                );
                current.set(filter.clone());
                Ok(ResolveResult {
                    accepted: true,
                    filter: FilterView {
                        days: u64::from(filter.days),
                        district: filter.district,
                    },
                    message: None,
                    suggestions: Vec::new(),
                })
            }
            Ok(Resolution::Rejected {
                input,
                suggestions,
                message,
                retained,
            }) => {
                info!("district name {input:?} rejected, {} suggestions", suggestions.len());
                Ok(ResolveResult {
                    accepted: false,
                    filter: FilterView {
                        days: u64::from(retained.days),
                        district: retained.district,
                    },
                    message: Some(message),
                    suggestions,
                })
            }
            Err(error @ ResolveError::EmptyQuery) => Err(error.to_string().into()),
            Err(error) => {
                warn!("query resolution failed: {error}");
                Ok(ResolveResult {
                    accepted: false,
                    filter: FilterView {
                        days: u64::from(prior.days),
                        district: prior.district,
                    },
                    message: Some(FAILURE_MESSAGE.to_string()),
                    suggestions: Vec::new(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::api::TestSchema;
    use crate::resolver::tests::FixedExtractor;
    use crate::resolver::ExtractedFilter;

    struct FailingExtractor;

    #[async_trait]
    impl Extract for FailingExtractor {
        async fn extract(&self, _query: &str) -> Result<ExtractedFilter, ResolveError> {
            Err(ResolveError::MalformedResponse("no candidates".to_string()))
        }
    }

    const RESOLVE: &str = r#"
    mutation {
        resolveQuery(query: "show Lucknow last 45 days") {
            accepted
            filter { days district }
            message
            suggestions
        }
    }"#;

    const CURRENT: &str = "{ currentFilter { days district } }";

    #[tokio::test]
    async fn current_filter_defaults_to_thirty_days_all_districts() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!(30), None)));
        let data = schema.execute(CURRENT).await.data.into_json().unwrap();
        assert_eq!(
            data["currentFilter"],
            json!({ "days": 30, "district": null })
        );
    }

    #[tokio::test]
    async fn accepted_query_updates_the_current_filter() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!(45), Some("Lucknow"))));

        let data = schema.execute(RESOLVE).await.data.into_json().unwrap();
        assert_eq!(
            data["resolveQuery"],
            json!({
                "accepted": true,
                "filter": { "days": 45, "district": "Lucknow" },
                "message": null,
                "suggestions": [],
            })
        );

        let data = schema.execute(CURRENT).await.data.into_json().unwrap();
        assert_eq!(
            data["currentFilter"],
            json!({ "days": 45, "district": "Lucknow" })
        );
    }

    #[tokio::test]
    async fn rejected_district_keeps_the_prior_filter() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!(45), Some("Lucknovv"))));

        let data = schema.execute(RESOLVE).await.data.into_json().unwrap();
        let result = &data["resolveQuery"];
        assert_eq!(result["accepted"], false);
        assert_eq!(result["filter"], json!({ "days": 30, "district": null }));
        assert_eq!(result["suggestions"][0], "Lucknow");
        let message = result["message"].as_str().unwrap();
        assert!(message.contains("\"**Lucknovv**\" not found"));
        assert!(message.contains("Did you mean: **Lucknow**"));

        let data = schema.execute(CURRENT).await.data.into_json().unwrap();
        assert_eq!(
            data["currentFilter"],
            json!({ "days": 30, "district": null })
        );
    }

    #[tokio::test]
    async fn invalid_days_keeps_the_prior_filter() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!("thirty"), None)));

        let data = schema.execute(RESOLVE).await.data.into_json().unwrap();
        let result = &data["resolveQuery"];
        assert_eq!(result["accepted"], false);
        assert_eq!(result["message"], FAILURE_MESSAGE);
        assert_eq!(result["filter"], json!({ "days": 30, "district": null }));
    }

    #[tokio::test]
    async fn extraction_failure_reports_the_generic_message() {
        let schema = TestSchema::new(Arc::new(FailingExtractor));

        let data = schema.execute(RESOLVE).await.data.into_json().unwrap();
        let result = &data["resolveQuery"];
        assert_eq!(result["accepted"], false);
        assert_eq!(result["message"], FAILURE_MESSAGE);
        assert_eq!(result["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn empty_query_is_a_request_error() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!(30), None)));

        let response = schema
            .execute(r#"mutation { resolveQuery(query: "   ") { accepted } }"#)
            .await;
        assert!(!response.errors.is_empty());
    }
}
