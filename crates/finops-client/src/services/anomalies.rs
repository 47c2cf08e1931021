use serde_json::Value;

use super::{Collection, ListQuery};
use crate::{ApiClient, ApiError, ApiRequest};

pub struct Anomalies<'a> {
    items: Collection<'a>,
}

impl<'a> Anomalies<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/anomalies/"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.items.list(query).await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.items.get(id).await
    }

    pub async fn update(&self, id: i64, payload: Value) -> Result<Value, ApiError> {
        self.items.update(id, payload).await
    }

    pub async fn resolve(&self, id: i64) -> Result<Value, ApiError> {
        self.post_action(id, "resolve").await
    }

    pub async fn mark_as_false_positive(&self, id: i64) -> Result<Value, ApiError> {
        self.post_action(id, "mark_false_positive").await
    }

    async fn post_action(&self, id: i64, action: &str) -> Result<Value, ApiError> {
        let request = ApiRequest::post(self.items.item_action_path(id, action));
        self.items.client().request_json(&request).await
    }
}
