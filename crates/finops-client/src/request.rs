use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::error::ApiError;

/// Everything needed to (re)send one call. Immutable once built, so a replay
/// after a token refresh sends exactly what the first attempt sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FilePart>),
}

#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn from_path(field: impl Into<String>, path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = guess_mime(path);
        let part = Self::new(field, file_name, bytes);
        Ok(match mime {
            Some(mime) => part.with_mime(mime),
            None => part,
        })
    }

    fn to_part(&self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        match self.mime.as_deref() {
            Some(mime) => part
                .mime_str(mime)
                .map_err(|err| ApiError::InvalidRequest(format!("mime type {mime}: {err}"))),
            None => Ok(part),
        }
    }
}

fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "tif" | "tiff" => Some("image/tiff"),
        "csv" => Some("text/csv"),
        _ => None,
    }
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_multipart(mut self, parts: Vec<FilePart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    pub fn with_query(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub(crate) fn url(&self, base_url: &str) -> String {
        let mut url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        append_params(&mut url, self.query.clone());
        url
    }

    /// Builds a fresh multipart form; forms are consumed on send.
    pub(crate) fn multipart_form(parts: &[FilePart]) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for part in parts {
            form = form.part(part.field.clone(), part.to_part()?);
        }
        Ok(form)
    }
}

pub fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(&key),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<String>>()
        .join("&");
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&query);
}
