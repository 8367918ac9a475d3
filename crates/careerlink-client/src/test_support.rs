//! Shared test doubles and fixtures for controller tests.

use crate::gateway::ApiGateway;
use async_trait::async_trait;
use careerlink_core::Result;
use careerlink_core::auth::{AuthSession, Credentials, SignupRequest, User};
use careerlink_core::career::CareerExperience;
use careerlink_core::profile::Profile;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted in-memory gateway.
///
/// Each endpoint pops the next scripted response; a call with nothing
/// scripted panics, which marks the test as driving an unexpected request.
/// Tokens passed to authenticated endpoints are recorded for assertion.
#[derive(Default)]
pub(crate) struct MockGateway {
    login_responses: Mutex<VecDeque<Result<AuthSession>>>,
    signup_responses: Mutex<VecDeque<Result<AuthSession>>>,
    fetch_profile_responses: Mutex<VecDeque<Result<Profile>>>,
    update_profile_responses: Mutex<VecDeque<Result<Profile>>>,
    list_responses: Mutex<VecDeque<Result<Vec<CareerExperience>>>>,
    add_responses: Mutex<VecDeque<Result<CareerExperience>>>,
    update_responses: Mutex<VecDeque<Result<CareerExperience>>>,
    delete_responses: Mutex<VecDeque<Result<String>>>,
    seen_tokens: Mutex<Vec<Option<String>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_login(&self, response: Result<AuthSession>) {
        self.login_responses.lock().unwrap().push_back(response);
    }

    pub fn script_signup(&self, response: Result<AuthSession>) {
        self.signup_responses.lock().unwrap().push_back(response);
    }

    pub fn script_fetch_profile(&self, response: Result<Profile>) {
        self.fetch_profile_responses.lock().unwrap().push_back(response);
    }

    pub fn script_update_profile(&self, response: Result<Profile>) {
        self.update_profile_responses.lock().unwrap().push_back(response);
    }

    pub fn script_list(&self, response: Result<Vec<CareerExperience>>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn script_add(&self, response: Result<CareerExperience>) {
        self.add_responses.lock().unwrap().push_back(response);
    }

    pub fn script_update(&self, response: Result<CareerExperience>) {
        self.update_responses.lock().unwrap().push_back(response);
    }

    pub fn script_delete(&self, response: Result<String>) {
        self.delete_responses.lock().unwrap().push_back(response);
    }

    /// Total number of gateway calls that reached this mock.
    pub fn calls(&self) -> usize {
        self.seen_tokens.lock().unwrap().len()
    }

    /// Tokens observed on each call, unauthenticated endpoints included
    /// (recorded as `None`).
    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.seen_tokens.lock().unwrap().clone()
    }

    fn record(&self, token: Option<&str>) {
        self.seen_tokens
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
    }

    fn take<T>(queue: &Mutex<VecDeque<Result<T>>>, endpoint: &str) -> Result<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {endpoint}"))
    }
}

#[async_trait]
impl ApiGateway for MockGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthSession> {
        self.record(None);
        Self::take(&self.login_responses, "login")
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<AuthSession> {
        self.record(None);
        Self::take(&self.signup_responses, "signup")
    }

    async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile> {
        self.record(token);
        Self::take(&self.fetch_profile_responses, "fetch_profile")
    }

    async fn update_profile(&self, token: Option<&str>, _profile: &Profile) -> Result<Profile> {
        self.record(token);
        Self::take(&self.update_profile_responses, "update_profile")
    }

    async fn list_experiences(&self, token: Option<&str>) -> Result<Vec<CareerExperience>> {
        self.record(token);
        Self::take(&self.list_responses, "list_experiences")
    }

    async fn add_experience(
        &self,
        token: Option<&str>,
        _experience: &CareerExperience,
    ) -> Result<CareerExperience> {
        self.record(token);
        Self::take(&self.add_responses, "add_experience")
    }

    async fn update_experience(
        &self,
        token: Option<&str>,
        _experience: &CareerExperience,
    ) -> Result<CareerExperience> {
        self.record(token);
        Self::take(&self.update_responses, "update_experience")
    }

    async fn delete_experience(&self, token: Option<&str>, _id: &str) -> Result<String> {
        self.record(token);
        Self::take(&self.delete_responses, "delete_experience")
    }
}

pub(crate) fn session(token: &str) -> AuthSession {
    AuthSession {
        user: User {
            name: "Minji Kim".to_string(),
            email: "minji@example.com".to_string(),
        },
        token: token.to_string(),
    }
}

pub(crate) fn profile(name: &str) -> Profile {
    Profile {
        id: Some("p-1".to_string()),
        name: name.to_string(),
        education: "B.A. Economics".to_string(),
        languages: "Korean, English".to_string(),
        certifications: "PMP".to_string(),
        phone: None,
        address: None,
    }
}

pub(crate) fn experience(id: Option<&str>, company: &str) -> CareerExperience {
    CareerExperience {
        id: id.map(str::to_string),
        company: company.to_string(),
        department: "Strategy".to_string(),
        position: "Manager".to_string(),
        start_date: "2019-03".to_string(),
        end_date: "2022-08".to_string(),
        responsibilities: "Led market entry planning".to_string(),
        projects: Vec::new(),
    }
}
