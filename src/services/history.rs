//! Bounded, in-memory search history log.
//!
//! The store is created once at startup and shared across workers through
//! `web::Data`. Each operation holds the internal mutex for its whole
//! duration and never awaits while holding it, so appends, removals and
//! clears are atomic with respect to each other: two concurrent appends at
//! capacity evict two distinct entries, never the same slot twice.

use crate::{
    config::HistoryConfig,
    models::{HistoryEntry, HistoryPage, NewHistoryEntry, PageRequest, MAX_CITY_CHARS},
    utils::params::truncate_chars,
};
use chrono::{DateTime, Utc};
use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Longest condition text stored with an entry
pub const MAX_CONDITION_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HistoryError {
    #[error("{0}")]
    Validation(String),

    #[error("history entry {0} not found")]
    NotFound(String),
}

#[derive(Debug, Default)]
struct HistoryLog {
    /// Oldest entry at the front
    entries: VecDeque<HistoryEntry>,
    /// Last issued id, used to keep ids strictly increasing
    last_id: i64,
}

impl HistoryLog {
    /// Next id: the creation time in milliseconds, bumped past the previous id
    /// when several entries land in the same millisecond or the clock steps back
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }
}

/// Process-wide history log with FIFO eviction at capacity
#[derive(Debug)]
pub struct HistoryStore {
    log: Mutex<HistoryLog>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            log: Mutex::new(HistoryLog::default()),
            capacity: config.capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate, normalize and append an entry, evicting the oldest one if the
    /// log is full
    pub fn append(&self, new_entry: NewHistoryEntry) -> Result<HistoryEntry, HistoryError> {
        let (city, temperature, condition) = validate(new_entry)?;

        let mut log = self.lock();
        let now = Utc::now();
        let entry = HistoryEntry {
            id: log.next_id(now),
            city,
            temperature,
            condition,
            timestamp: now,
        };

        while log.entries.len() >= self.capacity {
            if let Some(evicted) = log.entries.pop_front() {
                tracing::debug!(id = %evicted.id, city = %evicted.city, "Evicted oldest history entry");
            }
        }
        log.entries.push_back(entry.clone());

        Ok(entry)
    }

    /// Return one page of entries ordered by timestamp, newest first
    pub fn list(&self, page: PageRequest) -> HistoryPage {
        let log = self.lock();
        let total = log.entries.len();

        // Newest insertion first, then a stable sort keeps that order for
        // entries that share a timestamp
        let mut ordered: Vec<&HistoryEntry> = log.entries.iter().rev().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let history: Vec<HistoryEntry> = ordered
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        HistoryPage {
            total,
            count: history.len(),
            offset: page.offset,
            limit: page.limit,
            history,
        }
    }

    /// Remove the entry with the given id and return it
    pub fn remove_by_id(&self, id: &str) -> Result<HistoryEntry, HistoryError> {
        let mut log = self.lock();
        let index = log
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;

        log.entries
            .remove(index)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }

    /// Remove every entry and return how many were removed
    pub fn clear(&self) -> usize {
        let mut log = self.lock();
        let removed = log.entries.len();
        log.entries.clear();
        removed
    }

    fn lock(&self) -> MutexGuard<'_, HistoryLog> {
        // No operation leaves the log half-updated, so a poisoned lock is still usable
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

fn validate(new_entry: NewHistoryEntry) -> Result<(String, f64, String), HistoryError> {
    let missing = || {
        HistoryError::Validation("City, temperature, and condition are required".to_string())
    };

    let city = non_blank(new_entry.city).ok_or_else(missing)?;
    let condition = non_blank(new_entry.condition).ok_or_else(missing)?;
    let temperature = new_entry.temperature.ok_or_else(missing)?;

    if !temperature.is_finite() {
        return Err(HistoryError::Validation(
            "Temperature must be a finite number".to_string(),
        ));
    }

    Ok((
        truncate_chars(&city, MAX_CITY_CHARS),
        temperature,
        truncate_chars(&condition, MAX_CONDITION_CHARS),
    ))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
