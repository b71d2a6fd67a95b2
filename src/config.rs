//! Dashboard configuration.

use crate::error::TempCheckError;
use crate::format::{LabelFormatter, LabelZone};
use crate::types::query::default_start;
use bon::Builder;
use chrono::NaiveDateTime;
use reqwest::Url;

/// Where the backend lives and how the dashboard starts out.
///
/// # Examples
///
/// ```
/// use tempcheck::{DashboardConfig, LabelZone};
///
/// let config = DashboardConfig::builder()
///     .base_url("http://localhost:8080/backend")
///     .label_zone(LabelZone::Utc)
///     .build();
///
/// // endpoints are resolved below the base path
/// let base = config.resolve_base_url().unwrap();
/// assert_eq!(base.as_str(), "http://localhost:8080/backend/");
/// assert_eq!(config.default_start().to_string(), "2025-09-15 00:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DashboardConfig {
    /// Root of the backend; `api/v1/...` paths are joined onto it.
    #[builder(into)]
    base_url: String,
    /// Start of the range on first load and after a filter reset.
    #[builder(default = default_start())]
    default_start: NaiveDateTime,
    #[builder(default)]
    label_zone: LabelZone,
}

impl DashboardConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_start(&self) -> NaiveDateTime {
        self.default_start
    }

    pub fn label_zone(&self) -> LabelZone {
        self.label_zone
    }

    pub fn formatter(&self) -> LabelFormatter {
        LabelFormatter::new(self.label_zone)
    }

    /// Parses the base URL, adding a trailing `/` so joined endpoints keep
    /// its full path.
    pub fn resolve_base_url(&self) -> Result<Url, TempCheckError> {
        let invalid = |reason: String| TempCheckError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
