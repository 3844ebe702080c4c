// backend.rs — GoalsBackend: the three API calls the client makes.
//
// `HttpBackend` is the real implementation over reqwest. Bodies are parsed
// as JSON before the status is looked at, so an error response is read for
// its `message` and a non-JSON body of any status is a parse failure.

use async_trait::async_trait;
use goals_core::{Goal, GoalId};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Requests against the goals API.
#[async_trait]
pub trait GoalsBackend: Send + Sync {
    /// GET /goals
    async fn list(&self) -> Result<Vec<Goal>, ClientError>;

    /// POST /goals; only the assigned id of the response is used.
    async fn create(&self, text: &str) -> Result<GoalId, ClientError>;

    /// DELETE /goals/{id}
    async fn delete(&self, id: &GoalId) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct ListBody {
    goals: Vec<Goal>,
}

#[derive(Deserialize)]
struct CreatedGoal {
    id: GoalId,
}

#[derive(Deserialize)]
struct CreateBody {
    goal: CreatedGoal,
}

/// HTTP implementation of [`GoalsBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Client for the API rooted at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        tracing::debug!(%method, %url, "goals api request");
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }
        serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl GoalsBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Goal>, ClientError> {
        let url = self.endpoint(&["goals"])?;
        let body: ListBody = self.send(Method::GET, url, None).await?;
        Ok(body.goals)
    }

    async fn create(&self, text: &str) -> Result<GoalId, ClientError> {
        let url = self.endpoint(&["goals"])?;
        let body: CreateBody = self
            .send(Method::POST, url, Some(serde_json::json!({ "text": text })))
            .await?;
        Ok(body.goal.id)
    }

    async fn delete(&self, id: &GoalId) -> Result<(), ClientError> {
        let url = self.endpoint(&["goals", id.as_str()])?;
        let _: Value = self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}
