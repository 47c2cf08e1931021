use serde_json::Value;

use crate::{build_params, opt_param, ApiClient, ApiError, ApiRequest};

/// Query for list endpoints: pagination, search, ordering and field filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Empty search strings are dropped.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = build_params([
            opt_param("page", self.page.map(|page| page.to_string())),
            opt_param(
                "search",
                self.search.clone().filter(|search| !search.trim().is_empty()),
            ),
            opt_param("ordering", self.ordering.clone()),
        ]);
        params.extend(self.filters.iter().cloned());
        params
    }
}

/// CRUD over one REST collection rooted at `base` (e.g. `/invoices/`).
#[derive(Clone, Copy)]
pub struct Collection<'a> {
    client: &'a ApiClient,
    base: &'static str,
}

impl<'a> Collection<'a> {
    pub fn new(client: &'a ApiClient, base: &'static str) -> Self {
        Self { client, base }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn path(&self) -> &'static str {
        self.base
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}{}/", self.base, id)
    }

    pub fn action_path(&self, action: &str) -> String {
        format!("{}{}/", self.base, action)
    }

    pub fn item_action_path(&self, id: i64, action: &str) -> String {
        format!("{}{}/{}/", self.base, id, action)
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        let request = ApiRequest::get(self.base).with_query(query.to_params());
        self.client.request_json(&request).await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create(&self, payload: Value) -> Result<Value, ApiError> {
        self.client.post(self.base, payload).await
    }

    pub async fn update(&self, id: i64, payload: Value) -> Result<Value, ApiError> {
        self.client.patch(&self.item_path(id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&self.item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_router_layout() {
        let client = ApiClient::builder().base_url("http://books.test/api").build();
        let anomalies = Collection::new(&client, "/anomalies/");
        assert_eq!(anomalies.item_path(12), "/anomalies/12/");
        assert_eq!(anomalies.action_path("export"), "/anomalies/export/");
        assert_eq!(
            anomalies.item_action_path(12, "mark_false_positive"),
            "/anomalies/12/mark_false_positive/"
        );
    }

    #[test]
    fn list_query_orders_params_and_skips_blank_search() {
        let query = ListQuery::default()
            .page(2)
            .search(" ")
            .ordering("-transaction_date")
            .filter("status", "pending");
        assert_eq!(
            query.to_params(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("ordering".to_string(), "-transaction_date".to_string()),
                ("status".to_string(), "pending".to_string()),
            ]
        );
    }
}
