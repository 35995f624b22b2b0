//! The remote API client.
//!
//! All durable state lives behind the REST API; this module is the only
//! place that builds requests. Board persistence goes through
//! [`HttpGroupFieldWriter`], the app's implementation of the engine's
//! persistence seam: `PUT /api/{resource}/{id}` with the new status in the
//! body, any 2xx counting as success.

use crate::error::{AppError, Result};
use crate::project::Project;
use crate::task::Task;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use trellis_board::{BoardError, EntityId, GroupFieldWriter, GroupId, Member};

/// A team-member row from `GET /api/members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<TeamMember> for Member {
    fn from(member: TeamMember) -> Self {
        Self {
            id: trellis_board::MemberId::from_string(member.id),
            name: member.name,
            avatar_url: member.avatar_url,
        }
    }
}

/// Which REST collection a board persists into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Projects,
    Tasks,
}

impl Resource {
    fn segment(&self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::Tasks => "tasks",
        }
    }
}

/// Client for the dashboard's REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects").await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/api/tasks").await
    }

    pub async fn list_members(&self) -> Result<Vec<TeamMember>> {
        self.get_json("/api/members").await
    }

    /// Build the persistence-seam writer for one collection. The writer
    /// shares this client's connection pool.
    pub fn group_field_writer(&self, resource: Resource) -> HttpGroupFieldWriter {
        HttpGroupFieldWriter {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            resource,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::unexpected_status(url, status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

/// Persists a board's group field through the REST API.
pub struct HttpGroupFieldWriter {
    http: reqwest::Client,
    base_url: String,
    resource: Resource,
}

impl HttpGroupFieldWriter {
    fn endpoint(&self, entity: &EntityId) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            self.resource.segment(),
            entity
        )
    }
}

#[async_trait]
impl GroupFieldWriter for HttpGroupFieldWriter {
    async fn update_group_field(
        &self,
        entity: &EntityId,
        value: &GroupId,
    ) -> trellis_board::Result<()> {
        let url = self.endpoint(entity);
        tracing::debug!(%url, status = value.as_str(), "persisting group change");

        let response = self
            .http
            .put(&url)
            .json(&serde_json::json!({ "status": value.as_str() }))
            .send()
            .await
            .map_err(|e| BoardError::persist(entity.as_str(), e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BoardError::rejected(entity.as_str(), status.as_u16()))
        }
    }
}
