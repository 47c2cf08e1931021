use std::path::Path;

use serde_json::Value;

use super::{Collection, ListQuery};
use crate::{ApiClient, ApiError, ApiRequest, FilePart};

pub struct Invoices<'a> {
    items: Collection<'a>,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            items: Collection::new(client, "/invoices/"),
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

    /// Sends a scanned invoice as the multipart `file` field; the backend
    /// extracts the fields and returns the created invoice.
    pub async fn upload_with_ocr(&self, file: FilePart) -> Result<Value, ApiError> {
        let path = self.items.action_path("upload_with_ocr");
        self.items.client().post_multipart(&path, vec![file]).await
    }

    pub async fn upload_file_with_ocr(&self, path: &Path) -> Result<Value, ApiError> {
        let file = FilePart::from_path("file", path).map_err(|err| {
            ApiError::InvalidRequest(format!("cannot read {}: {err}", path.display()))
        })?;
        self.upload_with_ocr(file).await
    }

    /// CSV export of the invoices matching `query`.
    pub async fn export(&self, query: &ListQuery) -> Result<Vec<u8>, ApiError> {
        let request =
            ApiRequest::get(self.items.action_path("export")).with_query(query.to_params());
        let response = self.items.client().request(&request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
