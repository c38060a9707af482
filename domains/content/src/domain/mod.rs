//! Content domain types: entities, the editing form, and the status state machine

pub mod entities;
pub mod form;
pub mod state;
