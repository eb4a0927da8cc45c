//! Property repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use homestead_core::{NewProperty, Property, PropertyId};

use super::RepositoryError;

/// Storage operations for listings.
pub trait PropertyRepository: Send + Sync {
    /// All listings, in insertion order.
    fn list_all(&self) -> Vec<Property>;

    /// The listing with `id`, or `None` if it doesn't exist.
    fn get(&self, id: PropertyId) -> Option<Property>;

    /// Validate and store a new listing, assigning its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the payload is invalid, or
    /// `RepositoryError::IdsExhausted` if no fresh ID is left.
    fn create(&self, new: NewProperty) -> Result<Property, RepositoryError>;
}

/// [`PropertyRepository`] keeping listings in process memory.
///
/// IDs come from a sequential counter that starts at 1 and is only advanced
/// under the write lock, so ID order always matches insertion order and no
/// ID is ever handed out twice.
#[derive(Debug)]
pub struct InMemoryPropertyRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    properties: Vec<Property>,
    index: HashMap<PropertyId, usize>,
    next_id: i32,
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPropertyRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                properties: Vec::new(),
                index: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock can't leave `Inner` half-written (the
    // push and the index insert happen after every fallible step), so a
    // poisoned lock is still safe to use.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn list_all(&self) -> Vec<Property> {
        self.read().properties.clone()
    }

    fn get(&self, id: PropertyId) -> Option<Property> {
        let inner = self.read();
        inner
            .index
            .get(&id)
            .and_then(|&position| inner.properties.get(position))
            .cloned()
    }

    fn create(&self, new: NewProperty) -> Result<Property, RepositoryError> {
        let valid = new.validate()?;

        let mut inner = self.write();
        let id = PropertyId::new(inner.next_id);
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;

        let property = valid.into_property(id);
        let position = inner.properties.len();
        inner.properties.push(property.clone());
        inner.index.insert(id, position);
        drop(inner);

        tracing::debug!(property_id = %id, "Property created");
        Ok(property)
    }
}
