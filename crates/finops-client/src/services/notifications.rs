use serde_json::Value;

use super::{Collection, ListQuery};
use crate::models::MarkReadRequest;
use crate::{ApiClient, ApiError, ApiRequest};

pub struct Notifications<'a> {
    items: Collection<'a>,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/notifications/"),
        }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.items.list(&ListQuery::default()).await
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<Value, ApiError> {
        let payload = serde_json::to_value(MarkReadRequest { read: true })?;
        self.items.update(id, payload).await
    }

    pub async fn mark_all_as_read(&self) -> Result<Value, ApiError> {
        let request = ApiRequest::post(self.items.action_path("mark_all_read"));
        self.items.client().request_json(&request).await
    }
}
