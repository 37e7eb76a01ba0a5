//! Core trait definitions for entities and the stores that hold them.
//!
//! The domain model only ever refers to other entities by id. Stores are the
//! registries those ids resolve against; `crate::store::MemoryStore` is the
//! in-memory implementation.

/// An entity identified by a non-blank string id.
pub trait Entity {
    /// The id the entity is stored under.
    fn id(&self) -> &str;
}

/// Keyed storage for one kind of entity.
///
/// All stores share the same semantics: `save` overwrites an existing entry
/// with the same id, lookups of unknown ids return `None`, and deleting an
/// unknown id does nothing.
pub trait Store<T: Entity> {
    /// Insert `entity`, replacing any entry with the same id.
    fn save(&mut self, entity: T);

    /// Look up an entity by id.
    fn find_by_id(&self, id: &str) -> Option<&T>;

    /// Look up an entity by id for in-place mutation.
    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T>;

    /// Remove and return the entity with `id`, if any.
    fn delete_by_id(&mut self, id: &str) -> Option<T>;

    /// All stored entities in store order.
    fn find_all(&self) -> Vec<&T>;

    /// Number of stored entities.
    fn len(&self) -> usize {
        self.find_all().len()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
