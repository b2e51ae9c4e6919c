//! REST client for the hosted backend.
//!
//! Talks to the managed backend's auto-generated REST layer: one endpoint
//! per table under `/rest/v1/`, API key in both the `apikey` and bearer
//! headers, `Prefer: resolution=merge-duplicates` for upserts. The client
//! owns the runtime driving its HTTP calls, so callers stay synchronous.

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{ActiveSessionRecord, StudyBackend, StudyPlanRecord, SubjectSuggestionRecord};
use crate::error::BackendError;
use crate::stats::StudyStats;
use crate::storage::BackendConfig;

/// Client for the hosted backend's REST layer.
#[derive(Debug)]
pub struct RestBackend {
    base_url: Url,
    api_key: String,
    user_id: String,
    client: Client,
    runtime: tokio::runtime::Runtime,
}

impl RestBackend {
    /// Build a client from the backend section of the configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        if config.base_url.is_empty() {
            return Err(BackendError::NotConfigured("base_url is empty".to_string()));
        }
        if config.api_key.is_empty() {
            return Err(BackendError::NotConfigured("api_key is empty".to_string()));
        }
        if config.user_id.is_empty() {
            return Err(BackendError::NotConfigured("user_id is empty".to_string()));
        }

        let base_url = Url::parse(&config.base_url)
            .map_err(|_| BackendError::InvalidBaseUrl(config.base_url.clone()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            user_id: config.user_id.clone(),
            client: Client::new(),
            runtime,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|_| BackendError::InvalidBaseUrl(self.base_url.to_string()))
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Send a request and map non-success statuses to [`BackendError::Http`].
    fn send(&self, request: RequestBuilder) -> Result<String, BackendError> {
        self.runtime.block_on(async {
            let resp = request.send().await?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if status.is_success() {
                Ok(body)
            } else {
                Err(BackendError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
        })
    }

    fn get_rows<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Vec<T>, BackendError> {
        self.runtime.block_on(async {
            let resp = request.send().await?;
            let status = resp.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(Vec::new());
            }
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(BackendError::Http {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(resp.json().await?)
        })
    }

    fn stats_row(&self) -> Result<Option<StudyStatsRow>, BackendError> {
        let mut url = self.table_url("study_stats")?;
        url.query_pairs_mut()
            .append_pair("user_id", &format!("eq.{}", self.user_id));
        let rows: Vec<StudyStatsRow> = self.get_rows(self.authed(self.client.get(url)))?;
        Ok(rows.into_iter().next())
    }

    fn existing_total_minutes(&self) -> Result<u32, BackendError> {
        Ok(self
            .stats_row()?
            .and_then(|row| row.total_study_time_minutes)
            .unwrap_or(0))
    }
}

impl StudyBackend for RestBackend {
    fn name(&self) -> &str {
        "rest"
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn record_subject_suggestion(
        &self,
        record: &SubjectSuggestionRecord,
    ) -> Result<(), BackendError> {
        let url = self.table_url("ai_subject_suggestions")?;
        self.send(self.authed(self.client.post(url)).json(record))?;
        Ok(())
    }

    fn upsert_study_plan(&self, record: &StudyPlanRecord) -> Result<(), BackendError> {
        let url = self.table_url("ai_study_plans")?;
        self.send(
            self.authed(self.client.post(url))
                .header("Prefer", "resolution=merge-duplicates")
                .json(record),
        )?;
        Ok(())
    }

    fn start_session(&self, record: &ActiveSessionRecord) -> Result<(), BackendError> {
        let url = self.table_url("active_sessions")?;
        self.send(self.authed(self.client.post(url)).json(record))?;
        Ok(())
    }

    fn finish_session(&self, ended_at: DateTime<Utc>) -> Result<(), BackendError> {
        let mut url = self.table_url("active_sessions")?;
        url.query_pairs_mut()
            .append_pair("user_id", &format!("eq.{}", self.user_id))
            .append_pair("end_time", "is.null");
        let body = serde_json::json!({ "end_time": ended_at.to_rfc3339() });
        self.send(self.authed(self.client.patch(url)).json(&body))?;
        Ok(())
    }

    fn add_study_minutes(&self, minutes: u32, at: DateTime<Utc>) -> Result<(), BackendError> {
        let existing = self.existing_total_minutes()?;

        let url = self.table_url("study_stats")?;
        let body = serde_json::json!({
            "user_id": self.user_id,
            "total_study_time_minutes": existing + minutes,
            "last_study_date": at.to_rfc3339(),
            "updated_at": at.to_rfc3339(),
        });
        self.send(
            self.authed(self.client.post(url))
                .header("Prefer", "resolution=merge-duplicates")
                .json(&body),
        )?;
        Ok(())
    }

    fn fetch_stats(&self) -> Result<Option<StudyStats>, BackendError> {
        Ok(self.stats_row()?.map(StudyStatsRow::into_stats))
    }
}

/// Wire shape of a `study_stats` row; every column is nullable remotely.
#[derive(Debug, Deserialize, Serialize)]
struct StudyStatsRow {
    #[serde(default)]
    total_study_time_minutes: Option<u32>,
    #[serde(default)]
    current_streak: Option<u32>,
    #[serde(default)]
    longest_streak: Option<u32>,
    #[serde(default)]
    distraction_score: Option<u32>,
    #[serde(default)]
    last_study_date: Option<DateTime<Utc>>,
}

impl StudyStatsRow {
    fn into_stats(self) -> StudyStats {
        StudyStats {
            total_study_time_minutes: self.total_study_time_minutes.unwrap_or(0),
            current_streak: self.current_streak.unwrap_or(0),
            longest_streak: self.longest_streak.unwrap_or(0),
            distraction_score: self.distraction_score.unwrap_or(0),
            last_study_date: self.last_study_date,
        }
    }
}
