use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use spendcat_domain::{Category, CategoryList};
use tracing::{debug, info};

use crate::draft::CategoryDraft;
use crate::error::{CoreError, CoreResult};
use crate::id::{IdGenerator, TimeOrderedIds};
use crate::validation;

/// In-memory owner of the category collection.
///
/// Each mutating operation holds the lock for its whole validate-then-mutate
/// sequence, so concurrent writers never pass a uniqueness check against
/// stale state. A rejected write leaves the collection untouched.
pub struct CategoryStore {
    categories: Mutex<Vec<Category>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new(Arc::new(TimeOrderedIds))
    }
}

impl CategoryStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_categories(Vec::new(), ids)
    }

    /// Seeds the store with an existing collection; seeded data is trusted as-is.
    pub fn with_categories(categories: Vec<Category>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            categories: Mutex::new(categories),
            ids,
        }
    }

    pub fn add(&self, draft: CategoryDraft) -> CoreResult<Category> {
        let mut categories = self.lock();

        let name = validation::require(draft.name.as_deref())?;
        validation::validate_category_name(name)?;
        validation::ensure_unique(
            categories.iter(),
            name,
            None,
            CoreError::DuplicateCategoryName,
        )?;
        let parent_id = validation::require(draft.parent_id.as_deref())?;
        if !parent_id.is_empty() {
            validation::ensure_parent_assignable(&categories, parent_id)?;
        }

        let category = Category::new(self.ids.next_id(), name).with_parent(parent_id);
        categories.push(category.clone());
        info!("category `{}` added as {}", category.name, category.id);
        Ok(category)
    }

    pub fn rename(&self, id: &str, name: Option<&str>) -> CoreResult<Category> {
        let mut categories = self.lock();

        let name = validation::require(name)?;
        validation::validate_category_name(name)?;
        validation::ensure_unique(
            categories.iter(),
            name,
            Some(id),
            CoreError::DuplicateCategoryName,
        )?;
        let category = categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or(CoreError::CategoryNotFound)?;

        debug!("renaming category {} from `{}` to `{}`", id, category.name, name);
        category.name = name.to_string();
        Ok(category.clone())
    }

    /// Removes a category that no other category names as its parent.
    ///
    /// Question references live in another store; callers check them first.
    pub fn remove(&self, id: &str) -> CoreResult<()> {
        let mut categories = self.lock();

        let position = categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(CoreError::CategoryNotFound)?;
        if categories.iter().any(|category| category.is_child_of(id)) {
            return Err(CoreError::CategoryHasChildren);
        }

        let removed = categories.remove(position);
        info!("category `{}` removed ({})", removed.name, removed.id);
        Ok(())
    }

    /// All categories in insertion order.
    pub fn list(&self) -> CategoryList {
        CategoryList::from(self.lock().clone())
    }

    pub fn get(&self, id: &str) -> CoreResult<Category> {
        self.lock()
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or(CoreError::CategoryNotFound)
    }

    /// Direct children of `id`, in insertion order.
    pub fn children(&self, id: &str) -> Vec<Category> {
        self.lock()
            .iter()
            .filter(|category| category.is_child_of(id))
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().iter().any(|category| category.id == id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Swaps the whole collection, returning the previous contents.
    pub fn replace_all(&self, categories: Vec<Category>) -> Vec<Category> {
        std::mem::replace(&mut *self.lock(), categories)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Category>> {
        // Writes only happen after validation passes, so a poisoned guard
        // never holds a partially applied change.
        self.categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
