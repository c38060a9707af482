//! Transient editing form for the content screen
//!
//! Holds the fields being typed into the "New Content" form. Nothing in here
//! is committed until the store's `submit_form` is called.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ContentItem, ContentType};

/// Fields currently being edited, not yet committed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentForm {
    /// `None` while the type picker still shows its placeholder
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub title: String,
    pub description: String,
}

impl ContentForm {
    pub fn new(content_type: Option<ContentType>, title: &str, description: &str) -> Self {
        Self {
            content_type,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// All required fields are filled in
    pub fn is_complete(&self) -> bool {
        self.content_type.is_some() && !self.title.is_empty() && !self.description.is_empty()
    }

    /// True when nothing has been entered
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Copy an item's editable fields into the form
    pub fn load(&mut self, item: &ContentItem) {
        self.content_type = Some(item.content_type);
        self.title.clone_from(&item.title);
        self.description.clone_from(&item.description);
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
