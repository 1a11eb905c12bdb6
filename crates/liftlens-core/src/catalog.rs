// ABOUTME: Exercise catalog interface resolving free-text exercise names to canonical ids
// ABOUTME: Lookups are case-insensitive; the in-memory catalog doubles as a test fake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use crate::models::ExerciseId;

/// Name-to-id resolution, the single capability the engine needs from the catalog
pub trait ExerciseCatalog: Send + Sync {
    /// Resolve a display name to its id, ignoring case and surrounding whitespace
    fn resolve(&self, name: &str) -> Option<ExerciseId>;
}

/// Catalog held in memory, keyed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseCatalog {
    by_name: HashMap<String, ExerciseId>,
}

impl InMemoryExerciseCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog issuing slug ids for each name
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            let name = name.as_ref();
            catalog.insert(name, ExerciseId::slug(name));
        }
        catalog
    }

    /// Register a name (or alias) for an id; later registrations win
    pub fn insert(&mut self, name: &str, id: ExerciseId) {
        self.by_name.insert(Self::key(name), id);
    }

    /// Builder form of [`Self::insert`]
    #[must_use]
    pub fn with_exercise(mut self, name: &str, id: ExerciseId) -> Self {
        self.insert(name, id);
        self
    }

    /// Number of registered names
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether no names are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

impl ExerciseCatalog for InMemoryExerciseCatalog {
    fn resolve(&self, name: &str) -> Option<ExerciseId> {
        self.by_name.get(&Self::key(name)).cloned()
    }
}
