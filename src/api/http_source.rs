use crate::api::error::FetchError;
use crate::api::request::{ReadingsQuery, LOCATIONS_PATH, READINGS_PATH, SUMMARY_PATH};
use crate::api::source::SensorSource;
use crate::types::location::Location;
use crate::types::reading::RawReading;
use crate::types::summary::Summary;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// [`SensorSource`] backed by the REST API, with every endpoint resolved
/// relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSensorSource {
    client: Client,
    base_url: Url,
}

impl HttpSensorSource {
    /// `base_url` should end with `/`, otherwise its last path segment is
    /// replaced when endpoints are joined onto it.
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    pub fn locations_url(&self) -> Result<Url, FetchError> {
        self.endpoint(LOCATIONS_PATH)
    }

    pub fn summary_url(&self, location_sid: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(SUMMARY_PATH)?;
        url.query_pairs_mut()
            .append_pair("location_sid", location_sid);
        Ok(url)
    }

    pub fn readings_url(&self, query: &ReadingsQuery) -> Result<Url, FetchError> {
        let mut url = self.endpoint(READINGS_PATH)?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    /// Issues a GET and decodes the body as JSON.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let url_string = url.to_string();
        debug!("Requesting {}", url_string);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url_string.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url_string,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url_string, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url_string.clone(), e))?;
        serde_json::from_slice(&body).map_err(|source| FetchError::JsonParse {
            url: url_string,
            source,
        })
    }
}

#[async_trait]
impl SensorSource for HttpSensorSource {
    async fn locations(&self) -> Result<Vec<Location>, FetchError> {
        let locations: Option<Vec<Location>> = self.get_json(self.locations_url()?).await?;
        Ok(locations.unwrap_or_default())
    }

    async fn summary(&self, location_sid: &str) -> Result<Option<Summary>, FetchError> {
        self.get_json(self.summary_url(location_sid)?).await
    }

    async fn readings(&self, query: &ReadingsQuery) -> Result<Vec<RawReading>, FetchError> {
        // The backend encodes an empty result set as `null`.
        let readings: Option<Vec<RawReading>> = self.get_json(self.readings_url(query)?).await?;
        Ok(readings.unwrap_or_default())
    }
}
