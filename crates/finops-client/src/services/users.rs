use serde_json::Value;

use super::{Collection, ListQuery};
use crate::{ApiClient, ApiError};

pub struct Users<'a> {
    items: Collection<'a>,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/users/"),
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

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.items.delete(id).await
    }
}
