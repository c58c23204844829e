use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::warn;

use crate::core::types::RefId;
use crate::parsing::sam::ParseError;
use crate::utils::validation::check_reference_limit;

/// Resolves reference names to reference ids.
///
/// Lookups are exact and case-sensitive. Implementations are only read during
/// decoding, so a table shared across threads only needs `Sync`.
pub trait RefIdLookup {
    /// Return the id registered for `name`, if any
    fn ref_id(&self, name: &str) -> Option<RefId>;
}

impl<S: BuildHasher> RefIdLookup for HashMap<String, RefId, S> {
    fn ref_id(&self, name: &str) -> Option<RefId> {
        self.get(name).copied()
    }
}

impl RefIdLookup for BTreeMap<String, RefId> {
    fn ref_id(&self, name: &str) -> Option<RefId> {
        self.get(name).copied()
    }
}

/// Name-to-id table for the references hints may point at.
///
/// Ids are assigned in dictionary order starting at 0 unless given explicitly.
/// Aliases resolve to the id of the reference they were registered for.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    /// Primary names with their ids, in insertion order
    entries: Vec<(String, RefId)>,

    /// Primary names and aliases
    by_name: HashMap<String, RefId>,

    /// Index into `entries` for each id
    by_id: HashMap<RefId, usize>,

    next_id: i32,
}

impl ReferenceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table assigning ids `0..n` in iteration order
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicateReference` if a name repeats, or
    /// `ParseError::TooManyReferences` if the limit is exceeded.
    pub fn from_names<I, S>(names: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for name in names {
            table.push(name)?;
        }
        Ok(table)
    }

    /// Register `name` under the next free id and return that id
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicateReference` if the name is already present,
    /// or `ParseError::TooManyReferences` if the limit is exceeded.
    pub fn push(&mut self, name: impl Into<String>) -> Result<RefId, ParseError> {
        let id = RefId(self.next_id);
        self.insert(name, id)?;
        Ok(id)
    }

    /// Register `name` under an explicit id
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicateReference` if the name is already present,
    /// `ParseError::InvalidFormat` if the id is already taken, or
    /// `ParseError::TooManyReferences` if the limit is exceeded.
    pub fn insert(&mut self, name: impl Into<String>, id: RefId) -> Result<(), ParseError> {
        let name = name.into();

        if check_reference_limit(self.entries.len()).is_some() {
            return Err(ParseError::TooManyReferences(self.entries.len()));
        }
        if self.by_name.contains_key(&name) {
            return Err(ParseError::DuplicateReference(name));
        }
        if let Some(&idx) = self.by_id.get(&id) {
            return Err(ParseError::InvalidFormat(format!(
                "Reference id {id} is assigned to both '{}' and '{name}'",
                self.entries[idx].0
            )));
        }

        self.by_id.insert(id, self.entries.len());
        self.by_name.insert(name.clone(), id);
        self.entries.push((name, id));
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        Ok(())
    }

    /// Make `alias` resolve to the same id as an already registered reference.
    ///
    /// Aliases that collide with another reference's name are ignored with a
    /// warning; the primary name always wins.
    pub fn add_alias(&mut self, alias: impl Into<String>, id: RefId) {
        let alias = alias.into();
        if !self.by_id.contains_key(&id) {
            warn!(alias = %alias, id = %id, "Alias refers to unknown reference id, ignoring");
            return;
        }
        match self.by_name.get(&alias) {
            Some(&existing) if existing == id => {}
            Some(&existing) => {
                warn!(
                    alias = %alias,
                    id = %id,
                    existing = %existing,
                    "Alias already names another reference, ignoring"
                );
            }
            None => {
                self.by_name.insert(alias, id);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<RefId> {
        self.by_name.get(name).copied()
    }

    /// Primary name registered for `id`
    #[must_use]
    pub fn name(&self, id: RefId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|&idx| self.entries[idx].0.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RefIdLookup for ReferenceTable {
    fn ref_id(&self, name: &str) -> Option<RefId> {
        self.get(name)
    }
}
