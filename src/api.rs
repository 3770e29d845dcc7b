mod district;
mod resolve;
mod service_stat;

use std::sync::{Arc, RwLock};

use async_graphql::{EmptySubscription, MergedObject};

use crate::districts::DistrictSet;
use crate::resolver::{Extract, ResolvedFilter};

/// A set of queries defined in the schema.
///
/// This is exposed only for [`Schema`], and not used directly.
#[derive(Default, MergedObject)]
pub(crate) struct Query(
    district::DistrictQuery,
    resolve::FilterQuery,
    service_stat::ServiceStatQuery,
);

#[derive(Default, MergedObject)]
pub(crate) struct Mutation(resolve::ResolveMutation);

pub(crate) type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

/// The server-held "current filter". Read at the start of a resolution
/// and written exactly once on acceptance; rejections and failures leave
/// it untouched.
pub(crate) struct CurrentFilter(RwLock<ResolvedFilter>);

impl CurrentFilter {
    pub(crate) fn get(&self) -> ResolvedFilter {
        self.0.read().expect("filter lock poisoned").clone()
    }

    pub(crate) fn set(&self, filter: ResolvedFilter) {
        *self.0.write().expect("filter lock poisoned") = filter;
    }
}

impl Default for CurrentFilter {
    fn default() -> Self {
        Self(RwLock::new(ResolvedFilter::default()))
    }
}

pub(crate) fn schema(districts: DistrictSet, extractor: Arc<dyn Extract>) -> Schema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(districts)
        .data(extractor)
        .data(CurrentFilter::default())
        .finish()
}

#[cfg(test)]
pub(crate) struct TestSchema {
    schema: Schema,
}

#[cfg(test)]
impl TestSchema {
    pub(crate) fn new(extractor: Arc<dyn Extract>) -> Self {
        Self {
            schema: schema(DistrictSet::uttar_pradesh(), extractor),
        }
    }

    pub(crate) async fn execute(&self, query: &str) -> async_graphql::Response {
        let request: async_graphql::Request = query.into();
        self.schema.execute(request).await
    }
}
