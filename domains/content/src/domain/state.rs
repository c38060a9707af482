//! State machine for content workflow status
//!
//! Content states: Draft → Pending → Published, with the way back to Draft
//! open from both later states. No state is terminal: published content can
//! still be revised or deleted.

pub use hotelier_common::StateError;
use serde::{Deserialize, Serialize};

/// Content workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    Draft,
    Pending,
    Published,
}

impl ContentState {
    /// Check if this is a terminal state (content has no terminal states)
    pub fn is_terminal(&self) -> bool {
        false
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [ContentState] {
        match self {
            Self::Draft => &[Self::Pending],
            Self::Pending => &[Self::Published, Self::Draft],
            Self::Published => &[Self::Draft],
        }
    }
}

impl std::fmt::Display for ContentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Pending => write!(f, "pending"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// Events that trigger content state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentEvent {
    /// Hand a draft over for translation
    SubmitForTranslation,
    /// Pull pending content back for more editing
    ReturnToDraft,
    /// Translations are complete, content goes live
    Publish,
    /// Take live content down for revision
    Unpublish,
}

impl std::fmt::Display for ContentEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubmitForTranslation => write!(f, "submit_for_translation"),
            Self::ReturnToDraft => write!(f, "return_to_draft"),
            Self::Publish => write!(f, "publish"),
            Self::Unpublish => write!(f, "unpublish"),
        }
    }
}

/// Content state machine
pub struct ContentStateMachine;

impl ContentStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: ContentState,
        event: ContentEvent,
    ) -> Result<ContentState, StateError> {
        let next = match (current, event) {
            (ContentState::Draft, ContentEvent::SubmitForTranslation) => ContentState::Pending,

            (ContentState::Pending, ContentEvent::Publish) => ContentState::Published,
            (ContentState::Pending, ContentEvent::ReturnToDraft) => ContentState::Draft,

            (ContentState::Published, ContentEvent::Unpublish) => ContentState::Draft,

            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    to: "unknown".to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: ContentState, event: &ContentEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}
