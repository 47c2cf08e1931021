use chrono::NaiveDate;
use serde_json::Value;

use super::{Collection, ListQuery};
use crate::models::IncomeStatementRequest;
use crate::{ApiClient, ApiError};

pub struct Reports<'a> {
    items: Collection<'a>,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/reports/"),
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

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.items.delete(id).await
    }

    pub async fn generate_income_statement(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value, ApiError> {
        if end_date < start_date {
            return Err(ApiError::InvalidRequest(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }
        let payload = IncomeStatementRequest {
            start_date,
            end_date,
        };
        let path = self.items.action_path("generate_income_statement");
        self.items
            .client()
            .post(&path, serde_json::to_value(&payload)?)
            .await
    }
}
