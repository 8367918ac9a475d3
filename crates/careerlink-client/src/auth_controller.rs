//! Authentication controller.
//!
//! Binds the login/signup/logout operations to the auth state machine.
//! Every asynchronous operation dispatches a pending transition, awaits
//! exactly one gateway call, and dispatches the terminal transition; the
//! outcome is read back from the store, never returned. Failures never
//! escape the controller boundary.

use crate::gateway::ApiGateway;
use careerlink_core::Store;
use careerlink_core::auth::{AuthEvent, Credentials, SignupRequest};
use std::sync::Arc;

pub struct AuthController {
    store: Arc<Store>,
    gateway: Arc<dyn ApiGateway>,
}

impl AuthController {
    pub fn new(store: Arc<Store>, gateway: Arc<dyn ApiGateway>) -> Self {
        Self { store, gateway }
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the store holds the user and token; on failure it holds
    /// a sticky error that the consumer must clear before rendering the
    /// next attempt. Nothing is retried.
    pub async fn login(&self, email: impl Into<String>, password: impl Into<String>) {
        self.store.dispatch_auth(AuthEvent::LoginPending).await;
        let credentials = Credentials {
            email: email.into(),
            password: password.into(),
        };
        match self.gateway.login(&credentials).await {
            Ok(session) => {
                self.store
                    .dispatch_auth(AuthEvent::LoginFulfilled(session))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Login failed: {}", err);
                self.store.dispatch_auth(AuthEvent::LoginRejected(err)).await;
            }
        }
    }

    /// Creates an account and signs it in.
    ///
    /// Local validation (password confirmation, terms acceptance) is the
    /// presentation layer's responsibility before this is invoked; the
    /// controller submits whatever it is given.
    pub async fn signup(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.store.dispatch_auth(AuthEvent::SignupPending).await;
        let request = SignupRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        };
        match self.gateway.signup(&request).await {
            Ok(session) => {
                self.store
                    .dispatch_auth(AuthEvent::SignupFulfilled(session))
                    .await;
            }
            Err(err) => {
                tracing::warn!("Signup failed: {}", err);
                self.store
                    .dispatch_auth(AuthEvent::SignupRejected(err))
                    .await;
            }
        }
    }

    /// Drops the session unconditionally. No network call is made; a
    /// server-side invalidation, if ever wanted, would be a fire-and-forget
    /// side effect outside this state machine.
    pub async fn logout(&self) {
        self.store.dispatch_auth(AuthEvent::LoggedOut).await;
    }

    /// Clears a sticky error. Idempotent.
    pub async fn clear_error(&self) {
        self.store.dispatch_auth(AuthEvent::ErrorCleared).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockGateway, session};
    use careerlink_core::ApiError;

    fn controller(gateway: Arc<MockGateway>) -> (Arc<Store>, AuthController) {
        let store = Arc::new(Store::new());
        let controller = AuthController::new(store.clone(), gateway);
        (store, controller)
    }

    #[tokio::test]
    async fn test_login_fulfilled_populates_user_and_token() {
        let gateway = Arc::new(MockGateway::new());
        gateway.script_login(Ok(session("tok-1")));
        let (store, controller) = controller(gateway);

        controller.login("minji@example.com", "secret").await;

        let auth = store.auth().await;
        assert!(auth.is_authenticated());
        assert_eq!(auth.token(), Some("tok-1"));
        assert!(!auth.is_loading);
        assert!(auth.error.is_none());
    }

    #[tokio::test]
    async fn test_login_rejected_sets_error_and_leaves_session_unset() {
        let gateway = Arc::new(MockGateway::new());
        gateway.script_login(Err(ApiError::auth("invalid credentials")));
        let (store, controller) = controller(gateway);

        controller.login("minji@example.com", "wrong").await;

        let auth = store.auth().await;
        assert!(!auth.is_authenticated());
        assert!(!auth.is_loading);
        assert!(auth.error.as_ref().is_some_and(|e| e.is_auth()));
    }

    #[tokio::test]
    async fn test_signup_fulfilled_authenticates() {
        let gateway = Arc::new(MockGateway::new());
        gateway.script_signup(Ok(session("tok-2")));
        let (store, controller) = controller(gateway);

        controller.signup("Minji Kim", "minji@example.com", "secret").await;

        assert_eq!(store.bearer_token().await.as_deref(), Some("tok-2"));
    }

    #[tokio::test]
    async fn test_logout_clears_session_without_gateway_call() {
        let gateway = Arc::new(MockGateway::new());
        gateway.script_login(Ok(session("tok-1")));
        let (store, controller) = controller(gateway.clone());

        controller.login("minji@example.com", "secret").await;
        controller.logout().await;

        let auth = store.auth().await;
        assert!(auth.user().is_none());
        assert!(auth.token().is_none());
        // Only the login reached the gateway
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_clear_error_is_idempotent() {
        let gateway = Arc::new(MockGateway::new());
        let (store, controller) = controller(gateway);

        controller.clear_error().await;
        controller.clear_error().await;

        assert!(store.auth().await.error.is_none());
    }
}
