//! Read-only client for a PostgREST row store (Supabase).
//!
//! - One call shape: select every column of a table.
//! - Results come back as a [`QueryResponse`], mirroring the store's `{ data, error }` reply.

use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::domain::{ClothRow, CLOTH_TABLE};
use crate::util::config::{ConfigError, RowStoreConfig};

const REST_PATH: &str = "rest/v1/";

#[derive(Debug, Error)]
pub enum RowStoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid API key: {0}")]
    InvalidKey(#[from] InvalidHeaderValue),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure reported by the store, or a transport failure folded into the same shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(skip)]
    pub status: Option<u16>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    fn transport(error: reqwest::Error) -> Self {
        Self {
            status: error.status().map(|status| status.as_u16()),
            ..Self::new(error.to_string())
        }
    }

    fn from_response(status: StatusCode, body: &str) -> Self {
        let mut info = serde_json::from_str::<ErrorInfo>(body).unwrap_or_else(|_| {
            Self::new(
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            )
        });
        info.status = Some(status.as_u16());
        info
    }
}

/// Reply of a row-store query; exactly one side is populated.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResponse<T> {
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> QueryResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ErrorInfo) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryResponse<U> {
        QueryResponse {
            data: self.data.map(f),
            error: self.error,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(ErrorInfo::new("response missing data")),
        }
    }
}

#[derive(Clone)]
pub struct RowStoreClient {
    http: Client,
    rest_url: Url,
}

impl RowStoreClient {
    pub fn from_env() -> Result<Self, RowStoreError> {
        let config = RowStoreConfig::from_env()?;
        Self::new(&config)
    }

    pub fn new(config: &RowStoreConfig) -> Result<Self, RowStoreError> {
        let rest_url = config.base_url.join(REST_PATH)?;

        let mut api_key = HeaderValue::from_str(&config.anon_key)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http, rest_url })
    }

    /// Selects every column of every row in `table`, in the order the store returns them.
    pub async fn select_all<T>(&self, table: &str) -> QueryResponse<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.fetch_rows(table).await {
            Ok(rows) => QueryResponse::ok(rows),
            Err(error) => QueryResponse::err(error),
        }
    }

    pub async fn fetch_cloth_rows(&self) -> QueryResponse<Vec<ClothRow>> {
        info!(table = CLOTH_TABLE, "loading rows");
        let response = self
            .select_all::<ClothRowDto>(CLOTH_TABLE)
            .await
            .map(|rows| rows.into_iter().map(ClothRow::from).collect::<Vec<_>>());
        if let Some(rows) = response.data.as_ref() {
            info!(table = CLOTH_TABLE, count = rows.len(), "rows loaded");
        }
        response
    }

    async fn fetch_rows<T>(&self, table: &str) -> Result<Vec<T>, ErrorInfo>
    where
        T: DeserializeOwned,
    {
        let mut url = self
            .rest_url
            .join(table)
            .map_err(|err| ErrorInfo::new(format!("invalid table name {table:?}: {err}")))?;
        url.query_pairs_mut().append_pair("select", "*");

        debug!(%url, "requesting rows");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ErrorInfo::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorInfo::from_response(status, &body));
        }

        response.json::<Vec<T>>().await.map_err(ErrorInfo::transport)
    }
}

#[derive(Debug, Deserialize)]
struct ClothRowDto {
    id: i64,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(alias = "rarity")]
    rarerity: String,
    init_min_ability_value: f64,
    init_max_ability_value: f64,
    level_up_points: f64,
}

impl From<ClothRowDto> for ClothRow {
    fn from(dto: ClothRowDto) -> Self {
        Self {
            id: dto.id,
            created_at: parse_timestamp(dto.id, dto.created_at.as_deref()),
            rarity: dto.rarerity,
            init_min_ability_value: dto.init_min_ability_value,
            init_max_ability_value: dto.init_max_ability_value,
            level_up_points: dto.level_up_points,
        }
    }
}

fn parse_timestamp(id: i64, raw: Option<&str>) -> Option<OffsetDateTime> {
    let raw = raw?;
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            warn!(id, raw, %err, "unparsable created_at");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn dto_maps_misspelled_rarity_column() {
        let dto: ClothRowDto = serde_json::from_str(
            r#"{
                "id": 3,
                "created_at": "2025-04-01T09:30:00.123456+00:00",
                "rarerity": "Epic",
                "init_min_ability_value": 8,
                "init_max_ability_value": 14.5,
                "level_up_points": 4
            }"#,
        )
        .unwrap();

        let row = ClothRow::from(dto);

        assert_eq!(row.id, 3);
        assert_eq!(row.rarity, "Epic");
        assert_eq!(row.init_min_ability_value, 8.0);
        assert_eq!(row.init_max_ability_value, 14.5);
        assert_eq!(row.level_up_points, 4.0);
        assert_eq!(
            row.created_at,
            Some(datetime!(2025-04-01 9:30:00.123456 UTC))
        );
    }

    #[test]
    fn dto_accepts_rarity_alias_and_bad_timestamp() {
        let dto: ClothRowDto = serde_json::from_str(
            r#"{
                "id": 1,
                "created_at": "yesterday",
                "rarity": "Common",
                "init_min_ability_value": 1,
                "init_max_ability_value": 2,
                "level_up_points": 1
            }"#,
        )
        .unwrap();

        let row = ClothRow::from(dto);

        assert_eq!(row.rarity, "Common");
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn error_body_is_decoded() {
        let info = ErrorInfo::from_response(
            StatusCode::NOT_FOUND,
            r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.cloth\" does not exist"}"#,
        );

        assert_eq!(info.code.as_deref(), Some("42P01"));
        assert_eq!(info.message, "relation \"public.cloth\" does not exist");
        assert_eq!(info.details, None);
        assert_eq!(info.status, Some(404));
    }

    #[test]
    fn non_json_error_body_falls_back_to_status_text() {
        let info = ErrorInfo::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");

        assert_eq!(info.message, "Bad Gateway");
        assert_eq!(info.status, Some(502));
    }

    #[test]
    fn query_response_prefers_error() {
        let ok: QueryResponse<Vec<i32>> = QueryResponse::ok(vec![1, 2]);
        let failed: QueryResponse<Vec<i32>> = QueryResponse::err(ErrorInfo::new("boom"));
        let empty: QueryResponse<Vec<i32>> = QueryResponse {
            data: None,
            error: None,
        };

        assert_eq!(ok.map(|v| v.len()).into_result(), Ok(2));
        assert_eq!(failed.into_result(), Err(ErrorInfo::new("boom")));
        assert_eq!(
            empty.into_result().unwrap_err().message,
            "response missing data"
        );
    }

    #[test]
    fn missing_setting_surfaces_as_config_error() {
        let build = || -> Result<RowStoreClient, RowStoreError> {
            let config = RowStoreConfig::from_lookup(|_| None)?;
            RowStoreClient::new(&config)
        };

        let error = build().err().expect("no settings available");

        assert!(matches!(
            error,
            RowStoreError::Config(ConfigError::Missing("SUPABASE_URL"))
        ));
        assert_eq!(error.to_string(), "missing configuration value SUPABASE_URL");
    }

    #[test]
    fn client_targets_rest_endpoint() {
        let config = RowStoreConfig::new("https://demo.supabase.co", "anon").unwrap();

        let client = RowStoreClient::new(&config).unwrap();

        assert_eq!(client.rest_url.as_str(), "https://demo.supabase.co/rest/v1/");
    }
}
