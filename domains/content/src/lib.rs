//! Content domain: multilingual marketing content (room descriptions,
//! amenities, services) and its draft/translate/publish workflow

pub mod domain;
pub mod store;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ContentItem, ContentStatus, ContentType, ContentUpdate};
pub use domain::form::ContentForm;
pub use domain::state::{ContentEvent, ContentState, ContentStateMachine, StateError};
pub use store::ContentWorkflowStore;
