//! Authentication resource: session identity, bearer token, and the
//! login/signup/logout state machine.

pub mod model;
pub mod state;

pub use model::{AuthSession, Credentials, SignupRequest, User};
pub use state::{AuthEvent, AuthState};
