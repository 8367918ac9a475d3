//! I/O layer for the Global Career Link client.
//!
//! Binds the state machines in `careerlink-core` to the REST backend:
//! the [`ApiGateway`] trait (with its reqwest implementation
//! [`RestGateway`]) and the three resource controllers. A typical embedder
//! builds one [`Store`](careerlink_core::Store), one gateway, and hands
//! `Arc`s of both to the controllers it needs.

pub mod auth_controller;
pub mod career_controller;
pub mod config;
pub mod gateway;
pub mod profile_controller;
pub mod rest;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_controller::AuthController;
pub use career_controller::CareerController;
pub use config::GatewayConfig;
pub use gateway::ApiGateway;
pub use profile_controller::ProfileController;
pub use rest::RestGateway;
