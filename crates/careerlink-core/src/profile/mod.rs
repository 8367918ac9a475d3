//! Profile resource: the current user's single editable record.

pub mod model;
pub mod state;

pub use model::Profile;
pub use state::{ProfileEvent, ProfileState};
