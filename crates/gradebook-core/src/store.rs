//! In-memory stores keyed by entity id.

use std::collections::HashMap;

use crate::model::{Course, Student, Teacher};
use crate::traits::{Entity, Store};

/// An in-memory [`Store`] that keeps first-insert order.
///
/// Re-saving an existing id replaces the entity but keeps its position, so
/// `find_all` is stable across "with"-style updates.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
}

/// Store of teachers.
pub type TeacherStore = MemoryStore<Teacher>;
/// Store of courses.
pub type CourseStore = MemoryStore<Course>;
/// Store of students.
pub type StudentStore = MemoryStore<Student>;

impl<T> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Store<T> for MemoryStore<T> {
    fn save(&mut self, entity: T) {
        let id = entity.id().to_string();
        if self.entries.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.entries.get_mut(id)
    }

    fn delete_by_id(&mut self, id: &str) -> Option<T> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    fn find_all(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
