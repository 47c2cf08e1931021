use serde_json::Value;

use super::{Collection, ListQuery};
use crate::models::ReconcileRequest;
use crate::{ApiClient, ApiError};

pub struct Transactions<'a> {
    items: Collection<'a>,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/transactions/"),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.items.list(query).await
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

    pub async fn reconcile_with_invoice(
        &self,
        transaction_id: i64,
        invoice_id: i64,
    ) -> Result<Value, ApiError> {
        let payload = ReconcileRequest {
            transaction_id,
            invoice_id,
        };
        let path = self.items.action_path("reconcile_with_invoice");
        self.items
            .client()
            .post(&path, serde_json::to_value(&payload)?)
            .await
    }
}
