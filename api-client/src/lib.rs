use serde_json::json;
use thiserror::Error;

use forms_core::FormId;
#[cfg(target_arch = "wasm32")]
use forms_core::FormRecord;

#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

const DEFAULT_BASE_URL: &str = "https://formdesk-api.fly.dev";

/// Shared static credential the backend expects on every request. Embedded
/// in the client per the consumed API contract.
pub const AUTH_HEADER: &str = "Authorization";
pub const AUTH_TOKEN: &str = "1803-1989-1803-1989";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: AUTH_TOKEN.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Http(e.to_string())
    }
}

// ---------- Endpoint URLs ---------------------------------------------------

pub fn forms_url(config: &ApiConfig) -> String {
    format!("{}/get_forms", config.base())
}

pub fn form_pdf_url(config: &ApiConfig, id: &FormId) -> String {
    // Ids are caller-opaque and may carry reserved characters.
    format!(
        "{}/get_form_pdf/{}",
        config.base(),
        urlencoding::encode(&id.to_string())
    )
}

pub fn excel_export_url(config: &ApiConfig) -> String {
    format!("{}/form_gestores/download_excel", config.base())
}

pub fn delete_form_url(config: &ApiConfig) -> String {
    format!("{}/delete_especific_form", config.base())
}

// ---------- Operations (browser only) ---------------------------------------

/// Fetch the full list of form records.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_forms(config: &ApiConfig) -> Result<Vec<FormRecord>, ApiError> {
    let resp = Request::get(&forms_url(config))
        .header(AUTH_HEADER, &config.auth_token)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Vec<FormRecord>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the rendered PDF for a single record.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_form_pdf(config: &ApiConfig, id: &FormId) -> Result<Vec<u8>, ApiError> {
    fetch_binary(config, &form_pdf_url(config, id)).await
}

/// Fetch the spreadsheet export of the whole collection.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_excel_export(config: &ApiConfig) -> Result<Vec<u8>, ApiError> {
    fetch_binary(config, &excel_export_url(config)).await
}

#[cfg(target_arch = "wasm32")]
async fn fetch_binary(config: &ApiConfig, url: &str) -> Result<Vec<u8>, ApiError> {
    let resp = Request::get(url)
        .header(AUTH_HEADER, &config.auth_token)
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete one record by id. The caller removes it from local state only
/// after this resolves Ok.
#[cfg(target_arch = "wasm32")]
pub async fn delete_form(config: &ApiConfig, id: &FormId) -> Result<(), ApiError> {
    let resp = Request::post(&delete_form_url(config))
        .header(AUTH_HEADER, &config.auth_token)
        .header("Content-Type", "application/json")
        .body(delete_body(id))
        .map_err(|e| ApiError::Http(e.to_string()))?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// JSON body for the delete endpoint: `{"id": ...}` with the id in its
/// original representation.
pub fn delete_body(id: &FormId) -> String {
    json!({ "id": id }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_tolerate_trailing_slash() {
        let plain = ApiConfig::new("https://api.example.com");
        let slashed = ApiConfig::new("https://api.example.com/");
        assert_eq!(forms_url(&plain), forms_url(&slashed));
        assert_eq!(forms_url(&plain), "https://api.example.com/get_forms");
    }

    #[test]
    fn pdf_url_includes_id() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            form_pdf_url(&config, &FormId::Num(42)),
            "https://api.example.com/get_form_pdf/42"
        );
        assert_eq!(
            form_pdf_url(&config, &FormId::Text("a-7".into())),
            "https://api.example.com/get_form_pdf/a-7"
        );
    }

    #[test]
    fn pdf_url_escapes_reserved_characters() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            form_pdf_url(&config, &FormId::Text("a b/c?d".into())),
            "https://api.example.com/get_form_pdf/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn export_and_delete_urls() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            excel_export_url(&config),
            "https://api.example.com/form_gestores/download_excel"
        );
        assert_eq!(
            delete_form_url(&config),
            "https://api.example.com/delete_especific_form"
        );
    }

    #[test]
    fn delete_body_keeps_id_representation() {
        assert_eq!(delete_body(&FormId::Num(7)), r#"{"id":7}"#);
        assert_eq!(delete_body(&FormId::Text("a-7".into())), r#"{"id":"a-7"}"#);
    }

    #[test]
    fn default_config_carries_shared_token() {
        let config = ApiConfig::default();
        assert_eq!(config.auth_token, AUTH_TOKEN);
        let overridden = config.with_base_url("http://localhost:8080");
        assert_eq!(forms_url(&overridden), "http://localhost:8080/get_forms");
    }
}
