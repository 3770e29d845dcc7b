use async_graphql::{Context, Object, Result};

use crate::districts::DistrictSet;

#[derive(Default)]
pub(super) struct DistrictQuery {}

#[Object]
impl DistrictQuery {
    /// The canonical district names, in the order the dashboard lists them.
    #[allow(clippy::unused_async)]
    async fn districts(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let districts = ctx.data::<DistrictSet>()?;
        Ok(districts.iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::TestSchema;
    use crate::resolver::tests::FixedExtractor;

    #[tokio::test]
    async fn districts_are_listed_in_order() {
        let schema = TestSchema::new(Arc::new(FixedExtractor::new(json!(30), None)));

        let data = schema
            .execute("{ districts }")
            .await
            .data
            .into_json()
            .unwrap();
        let districts = data["districts"].as_array().unwrap();
        assert_eq!(districts.len(), 75);
        assert_eq!(districts[0], "Agra");
        assert_eq!(districts[74], "Varanasi");
    }
}
