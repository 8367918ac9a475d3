//! REST gateway trait.
//!
//! Defines the contract for the backend the controllers talk to, one
//! method per endpoint. Decoupling the controllers from the concrete HTTP
//! transport keeps them testable against scripted in-memory gateways.

use async_trait::async_trait;
use careerlink_core::Result;
use careerlink_core::auth::{AuthSession, Credentials, SignupRequest};
use careerlink_core::career::CareerExperience;
use careerlink_core::profile::Profile;

/// An abstract REST backend for the Career Link API.
///
/// Authenticated methods take the bearer token as `Option<&str>`: the
/// gateway sends whatever it is given and never checks for presence. A
/// missing token simply means no `Authorization` header, which the backend
/// rejects like any other failure.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Exchanges credentials for an authenticated session.
    ///
    /// `POST /api/auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Creates an account and returns its authenticated session.
    ///
    /// `POST /api/auth/signup`
    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession>;

    /// Fetches the current user's profile.
    ///
    /// `GET /api/profile`
    async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile>;

    /// Replaces the current user's profile wholesale.
    ///
    /// `PUT /api/profile`
    async fn update_profile(&self, token: Option<&str>, profile: &Profile) -> Result<Profile>;

    /// Lists the user's career experiences in server order.
    ///
    /// `GET /api/career`
    async fn list_experiences(&self, token: Option<&str>) -> Result<Vec<CareerExperience>>;

    /// Persists a new experience; the returned record carries the
    /// server-assigned id.
    ///
    /// `POST /api/career`
    async fn add_experience(
        &self,
        token: Option<&str>,
        experience: &CareerExperience,
    ) -> Result<CareerExperience>;

    /// Updates an existing experience. The experience must carry a
    /// persisted id.
    ///
    /// `PUT /api/career/{id}`
    async fn update_experience(
        &self,
        token: Option<&str>,
        experience: &CareerExperience,
    ) -> Result<CareerExperience>;

    /// Deletes an experience and returns the id it removed.
    ///
    /// `DELETE /api/career/{id}`
    async fn delete_experience(&self, token: Option<&str>, id: &str) -> Result<String>;
}
