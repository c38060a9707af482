//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests:
//! - Session fixtures built from a test configuration
//! - Content and room fixtures
//! - Common assertions

#![allow(dead_code)]

use hotelier_app::AdminSession;
use hotelier_common::Config;
use hotelier_content::{ContentItem, ContentStatus, ContentType, ContentWorkflowStore};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Configuration for tests: never reads the process environment
pub fn test_config() -> Config {
    Config {
        property_name: "Integration Test Hotel".to_string(),
        ..Config::default()
    }
}

/// A fresh, unseeded session
pub fn empty_session() -> AdminSession {
    AdminSession::new(&test_config())
}

/// Submit a content item and return its id
pub fn create_content(
    store: &mut ContentWorkflowStore,
    content_type: ContentType,
    title: &str,
    description: &str,
    is_draft: bool,
) -> Uuid {
    store
        .submit(Some(content_type), title, description, is_draft)
        .map(|item| item.id)
        .expect("complete submission should create an item")
}

/// Nightly rate in whole currency units
pub fn rate(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}

pub fn titles(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

/// Every item is in exactly one status view and the views cover the list
pub fn assert_status_views_partition(store: &ContentWorkflowStore) {
    let mut seen: Vec<Uuid> = Vec::new();
    for status in ContentStatus::ALL {
        for item in store.filter_by_status(status) {
            assert_eq!(item.status, status);
            assert!(!seen.contains(&item.id), "item {} in two views", item.id);
            seen.push(item.id);
        }
    }
    assert_eq!(seen.len(), store.len());
}
