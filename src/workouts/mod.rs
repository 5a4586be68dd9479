//! Workout logging and favorite templates.

pub mod favorites;
pub mod types;

pub use favorites::FavoriteTemplates;
pub use types::{Exercise, TemplateKey, Workout};
