//! Career experience resource: the user's employment records and their
//! nested projects.

pub mod model;
pub mod state;

pub use model::{CareerExperience, CareerProject};
pub use state::{CareerEvent, CareerState};
