//! Shared traits implemented by the catalogue entities.

/// Exposes the opaque identifier assigned when an entity was created.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to the label that must stay unique in a collection.
///
/// Categories expose their `name`, questions their `title`.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates entities with the category they are scoped to.
pub trait BelongsToCategory {
    fn category_id(&self) -> &str;

    fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id() == category_id
    }
}
