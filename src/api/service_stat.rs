use async_graphql::{Context, InputObject, Object, Result, SimpleObject};

use crate::baseline::SERVICE_BASELINE;

#[derive(InputObject, Debug, Default)]
pub(crate) struct ServiceStatFilter {
    /// Restrict the report to one canonical district name.
    district: Option<String>,
}

#[derive(SimpleObject)]
struct DistrictServiceStat {
    name: String,

    /// Applications received in the baseline window.
    received: i32,

    /// Applications delivered to the citizen.
    delivered: i32,

    /// Applications still pending.
    pending: i32,
}

#[derive(SimpleObject)]
struct ServiceStat {
    total_received: i32,
    total_delivered: i32,
    total_pending: i32,

    /// Per-district rows the totals are computed from.
    districts: Vec<DistrictServiceStat>,
}

#[derive(Default)]
pub(super) struct ServiceStatQuery {}

#[Object]
impl ServiceStatQuery {
    /// Service-application statistics, optionally filtered to a single
    /// district. The filter value is expected to be a canonical name
    /// coming out of a resolution; anything else matches no rows.
    #[allow(clippy::unused_async)]
    async fn service_stat(
        &self,
        _ctx: &Context<'_>,
        filter: Option<ServiceStatFilter>,
    ) -> Result<ServiceStat> {
        let district = filter.and_then(|f| f.district);

        let districts: Vec<DistrictServiceStat> = SERVICE_BASELINE
            .iter()
            .filter(|(name, ..)| district.as_deref().is_none_or(|d| d == *name))
            .map(|&(name, received, delivered, pending)| DistrictServiceStat {
                name: name.to_string(),
                received,
                delivered,
                pending,
            })
            .collect();

        Ok(ServiceStat {
            total_received: districts.iter().map(|d| d.received).sum(),
            total_delivered: districts.iter().map(|d| d.delivered).sum(),
            total_pending: districts.iter().map(|d| d.pending).sum(),
            districts,
        })
    }
}
