//! Domain entities for Content domain
//!
//! A content item is one piece of translatable marketing text. Items are
//! created in the primary language as either a draft or already pending
//! translation, and move through the workflow in `domain::state`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hotelier_common::{Error, Result};

use crate::domain::state::{ContentEvent, ContentState, ContentStateMachine};

/// Kind of content being described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Room description
    #[serde(alias = "room-description")]
    Room,
    Amenity,
    Service,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Room,
        ContentType::Amenity,
        ContentType::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Room => "room",
            ContentType::Amenity => "amenity",
            ContentType::Service => "service",
        }
    }

    /// Label shown in the content type picker
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Room => "Room Description",
            ContentType::Amenity => "Amenity",
            ContentType::Service => "Service",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "room" | "room-description" => Ok(ContentType::Room),
            "amenity" => Ok(ContentType::Amenity),
            "service" => Ok(ContentType::Service),
            other => Err(Error::Validation(format!(
                "Unknown content type '{}'",
                other
            ))),
        }
    }
}

/// Content workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Pending,
    Published,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [
        ContentStatus::Draft,
        ContentStatus::Pending,
        ContentStatus::Published,
    ];

    /// Status a freshly submitted item starts in
    pub fn initial(is_draft: bool) -> Self {
        if is_draft {
            ContentStatus::Draft
        } else {
            ContentStatus::Pending
        }
    }

    /// Convert to state machine state
    pub fn to_state(&self) -> ContentState {
        match self {
            ContentStatus::Draft => ContentState::Draft,
            ContentStatus::Pending => ContentState::Pending,
            ContentStatus::Published => ContentState::Published,
        }
    }

    /// Create from state machine state
    pub fn from_state(state: ContentState) -> Self {
        match state {
            ContentState::Draft => ContentStatus::Draft,
            ContentState::Pending => ContentStatus::Pending,
            ContentState::Published => ContentStatus::Published,
        }
    }

    /// Get valid next states from current state
    pub fn valid_transitions(&self) -> Vec<ContentStatus> {
        self.to_state()
            .valid_transitions()
            .iter()
            .map(|s| ContentStatus::from_state(*s))
            .collect()
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_state(), f)
    }
}

/// Content item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create a new content item with validation
    pub fn new(
        content_type: ContentType,
        title: String,
        description: String,
        is_draft: bool,
    ) -> Result<Self> {
        if title.is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if description.is_empty() {
            return Err(Error::Validation("Description is required".to_string()));
        }

        let now = Utc::now();
        Ok(ContentItem {
            id: Uuid::new_v4(),
            content_type,
            title,
            description,
            status: ContentStatus::initial(is_draft),
            created_at: now,
            updated_at: now,
        })
    }

    /// Hand a draft over for translation
    pub fn submit_for_translation(&mut self) -> Result<()> {
        self.apply(ContentEvent::SubmitForTranslation)
    }

    /// Pull pending content back to draft
    pub fn return_to_draft(&mut self) -> Result<()> {
        self.apply(ContentEvent::ReturnToDraft)
    }

    /// Mark translated content as published
    pub fn publish(&mut self) -> Result<()> {
        self.apply(ContentEvent::Publish)
    }

    /// Take published content back to draft
    pub fn unpublish(&mut self) -> Result<()> {
        self.apply(ContentEvent::Unpublish)
    }

    /// Apply a workflow event, updating status and `updated_at`
    pub fn apply(&mut self, event: ContentEvent) -> Result<()> {
        let new_state = ContentStateMachine::transition(self.status.to_state(), event)
            .map_err(|e| e.into_validation("content"))?;
        self.status = ContentStatus::from_state(new_state);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Check if a transition is valid without applying it
    pub fn can_transition(&self, event: &ContentEvent) -> bool {
        ContentStateMachine::can_transition(self.status.to_state(), event)
    }

    /// Overwrite the fields named in `update`. Status, id and `created_at`
    /// are left alone.
    pub fn apply_update(&mut self, update: ContentUpdate) -> Result<()> {
        update.check()?;

        if let Some(content_type) = update.content_type {
            self.content_type = content_type;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Partial update of a content item's primary-language fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContentUpdate {
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,
}

impl ContentUpdate {
    pub fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.title.is_none() && self.description.is_none()
    }

    /// Validate field rules and reject updates that change nothing
    pub fn check(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Validation(
                "Update must change at least one field".to_string(),
            ));
        }
        self.validate()
            .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))
    }
}
