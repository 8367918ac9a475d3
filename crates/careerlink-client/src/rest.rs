//! reqwest-backed implementation of [`ApiGateway`].

use crate::config::GatewayConfig;
use crate::gateway::ApiGateway;
use async_trait::async_trait;
use careerlink_core::auth::{AuthSession, Credentials, SignupRequest};
use careerlink_core::career::CareerExperience;
use careerlink_core::profile::Profile;
use careerlink_core::{ApiError, Result};
use reqwest::{Client, RequestBuilder, Response};

/// HTTP gateway for the Career Link REST API.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    /// Builds a gateway from the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::network(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer token when one was provided. The gateway never
    /// checks for presence; an absent token means an absent header.
    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Sends the request and converts a non-2xx response into a tagged
    /// error carrying the status classification and the response body.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|err| {
            tracing::debug!("Request transport failure: {}", err);
            ApiError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            };
            tracing::debug!("Request rejected with status {}", status.as_u16());
            return Err(ApiError::from_status(status.as_u16(), message));
        }
        Ok(response)
    }
}

#[async_trait]
impl ApiGateway for RestGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        let request = self.client.post(self.url("/api/auth/login")).json(credentials);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession> {
        let request = self.client.post(self.url("/api/auth/signup")).json(request);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile> {
        let request = Self::authorize(self.client.get(self.url("/api/profile")), token);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn update_profile(&self, token: Option<&str>, profile: &Profile) -> Result<Profile> {
        let request =
            Self::authorize(self.client.put(self.url("/api/profile")), token).json(profile);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn list_experiences(&self, token: Option<&str>) -> Result<Vec<CareerExperience>> {
        let request = Self::authorize(self.client.get(self.url("/api/career")), token);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn add_experience(
        &self,
        token: Option<&str>,
        experience: &CareerExperience,
    ) -> Result<CareerExperience> {
        let request =
            Self::authorize(self.client.post(self.url("/api/career")), token).json(experience);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn update_experience(
        &self,
        token: Option<&str>,
        experience: &CareerExperience,
    ) -> Result<CareerExperience> {
        let id = experience
            .id
            .as_deref()
            .ok_or_else(|| ApiError::validation("career experience update requires a persisted id"))?;
        let request = Self::authorize(
            self.client.put(self.url(&format!("/api/career/{id}"))),
            token,
        )
        .json(experience);
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::from)
    }

    async fn delete_experience(&self, token: Option<&str>, id: &str) -> Result<String> {
        let request = Self::authorize(
            self.client.delete(self.url(&format!("/api/career/{id}"))),
            token,
        );
        // The response body is ignored; the id is echoed back so the
        // reducer can remove the matching entry.
        self.send(request).await?;
        Ok(id.to_string())
    }
}
