use serde_json::Value;

use super::{Collection, ListQuery};
use crate::{ApiClient, ApiError};

pub struct BankAccounts<'a> {
    items: Collection<'a>,
}

impl<'a> BankAccounts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/bank-accounts/"),
        }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.items.list(&ListQuery::default()).await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.items.get(id).await
    }

    pub async fn create(&self, payload: Value) -> Result<Value, ApiError> {
        self.items.create(payload).await
    }

    pub async fn update(&self, id: i64, payload: Value) -> Result<Value, ApiError> {
        self.items.update(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.items.delete(id).await
    }
}
