//! In-memory content workflow store
//!
//! Owns the list of content items for one admin screen session together
//! with the transient form. Items are kept newest first. Nothing here is
//! persisted; dropping the store discards the session.
//!
//! `submit`, `select_for_edit` and `delete` never fail: an incomplete
//! submission is ignored and deleting an unknown id does nothing. Selecting
//! an item for editing only stages its fields, so submitting afterwards
//! creates a new item next to the original. Changing an existing item goes
//! through `update_in_place` and `advance_status` instead.

use tracing::{debug, info};
use uuid::Uuid;

use hotelier_common::{Error, Result};

use crate::domain::entities::{ContentItem, ContentStatus, ContentType, ContentUpdate};
use crate::domain::form::ContentForm;
use crate::domain::state::ContentEvent;

#[derive(Debug, Clone, Default)]
pub struct ContentWorkflowStore {
    items: Vec<ContentItem>,
    form: ContentForm,
}

impl ContentWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, newest first
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn form(&self) -> &ContentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContentForm {
        &mut self.form
    }

    /// Create a new item from the given fields and put it at the front of
    /// the list. Returns `None` without touching anything if a field is
    /// empty. On success the form is cleared.
    pub fn submit(
        &mut self,
        content_type: Option<ContentType>,
        title: &str,
        description: &str,
        is_draft: bool,
    ) -> Option<&ContentItem> {
        let Some(content_type) = content_type else {
            debug!("Ignoring content submission without a content type");
            return None;
        };

        let item = match ContentItem::new(
            content_type,
            title.to_string(),
            description.to_string(),
            is_draft,
        ) {
            Ok(item) => item,
            Err(e) => {
                debug!(error = %e, "Ignoring incomplete content submission");
                return None;
            }
        };

        info!(
            content_id = %item.id,
            content_type = %item.content_type,
            status = %item.status,
            "Content created"
        );

        self.items.insert(0, item);
        self.form.clear();
        self.items.first()
    }

    /// Submit whatever is currently in the form. The form is left as is
    /// when the submission is ignored.
    pub fn submit_form(&mut self, is_draft: bool) -> Option<&ContentItem> {
        let ContentForm {
            content_type,
            title,
            description,
        } = self.form.clone();
        self.submit(content_type, &title, &description, is_draft)
    }

    /// Stage an item's fields in the form. The item itself is unchanged and
    /// stays in the list.
    pub fn select_for_edit(&mut self, item: &ContentItem) {
        debug!(content_id = %item.id, "Content selected for edit");
        self.form.load(item);
    }

    /// Same as `select_for_edit` for callers holding only an id. Returns
    /// whether the item exists.
    pub fn select_for_edit_by_id(&mut self, id: Uuid) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                debug!(content_id = %id, "Content selected for edit");
                self.form.load(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: Uuid) -> Option<ContentItem> {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                info!(content_id = %id, status = %removed.status, "Content deleted");
                Some(removed)
            }
            None => {
                debug!(content_id = %id, "Delete of unknown content ignored");
                None
            }
        }
    }

    /// Items with the given status, in list order. The iterator can be
    /// cloned to walk the view again.
    pub fn filter_by_status(
        &self,
        status: ContentStatus,
    ) -> impl Iterator<Item = &ContentItem> + Clone + '_ {
        self.items.iter().filter(move |item| item.status == status)
    }

    pub fn drafts(&self) -> impl Iterator<Item = &ContentItem> + Clone + '_ {
        self.filter_by_status(ContentStatus::Draft)
    }

    /// Items waiting on translation
    pub fn pending_translations(&self) -> impl Iterator<Item = &ContentItem> + Clone + '_ {
        self.filter_by_status(ContentStatus::Pending)
    }

    pub fn published(&self) -> impl Iterator<Item = &ContentItem> + Clone + '_ {
        self.filter_by_status(ContentStatus::Published)
    }

    pub fn count_by_status(&self, status: ContentStatus) -> usize {
        self.filter_by_status(status).count()
    }

    /// Move an item through the workflow
    pub fn advance_status(&mut self, id: Uuid, event: ContentEvent) -> Result<&ContentItem> {
        let item = self.find_mut(id)?;
        let from = item.status;
        item.apply(event)?;

        info!(
            content_id = %id,
            from = %from,
            to = %item.status,
            event = %event,
            "Content status changed"
        );
        Ok(&*item)
    }

    /// Edit an item's fields without creating a new one. Status and list
    /// position are kept.
    pub fn update_in_place(&mut self, id: Uuid, update: ContentUpdate) -> Result<&ContentItem> {
        let item = self.find_mut(id)?;
        item.apply_update(update)?;

        info!(content_id = %id, "Content updated");
        Ok(&*item)
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut ContentItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(format!("Content item {}", id)))
    }
}
