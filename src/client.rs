use crate::address::{Address, DEFAULT_COUNTRY};
use crate::config::Config;
use crate::error::{BadRequestError, ConfigError, LookupError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

/// Finds the addresses registered at a postcode.
#[async_trait]
pub trait AddressClient: Send + Sync {
    async fn lookup_postcode(&self, postcode: &str) -> Result<Vec<Address>, LookupError>;
}

/// [`AddressClient`] backed by the Ordnance Survey Places API.
#[derive(Debug, Clone)]
pub struct OsPlacesClient {
    pub config: Config,
    http_client: reqwest::Client,
}

impl OsPlacesClient {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let http_client = config.http_client()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Reads [`Config`] from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(Config::from_env()?)
    }

    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl AddressClient for OsPlacesClient {
    async fn lookup_postcode(&self, postcode: &str) -> Result<Vec<Address>, LookupError> {
        let resp = self
            .http_client
            .get(self.config.postcode_url(postcode))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        parse_response(status, &body)
    }
}

fn parse_response(status: StatusCode, body: &[u8]) -> Result<Vec<Address>, LookupError> {
    if status == StatusCode::BAD_REQUEST {
        if let Ok(ErrorResponse { error }) = serde_json::from_slice(body) {
            return Err(error.into());
        }
    }

    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    let resp: PostcodeLookupResponse = serde_json::from_slice(body)?;

    Ok(resp
        .results
        .into_iter()
        .map(|result| result.dpa.into())
        .collect())
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: BadRequestError,
}

#[derive(Deserialize)]
struct PostcodeLookupResponse {
    #[serde(default)]
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
struct LookupResult {
    #[serde(rename = "DPA")]
    dpa: DeliveryPoint,
}

/// One Royal Mail delivery point.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
struct DeliveryPoint {
    sub_building_name: String,
    building_name: String,
    building_number: String,
    thoroughfare_name: String,
    dependent_locality: String,
    post_town: String,
    postcode: String,
}

impl From<DeliveryPoint> for Address {
    fn from(dpa: DeliveryPoint) -> Self {
        let street = join(&[dpa.building_number.as_str(), dpa.thoroughfare_name.as_str()], " ");

        let (line1, line2, line3) = if dpa.building_name.is_empty() {
            (street, dpa.dependent_locality, String::new())
        } else {
            (
                join(&[dpa.sub_building_name.as_str(), dpa.building_name.as_str()], ", "),
                street,
                dpa.dependent_locality,
            )
        };

        Address {
            line1,
            line2,
            line3,
            town_or_city: dpa.post_town,
            postcode: dpa.postcode,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

fn join(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}
