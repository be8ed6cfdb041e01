//! Validation rules shared by the category and question stores.
//!
//! Every function here is pure: it inspects the current collection state and
//! a proposed value and either accepts it or names the rejected rule. None of
//! them mutate anything, so stores can run them all before touching state.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use spendcat_domain::{BelongsToCategory, Category, Identifiable, NamedEntity, QuestionType};

use crate::draft::OptionsField;
use crate::error::{CoreError, CoreResult};

/// Letters, digits, spaces and a short punctuation whitelist, with at least
/// one character that is not a space.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N} '_,.:?()&\-]*[\p{L}\p{N}'_,.:?()&\-][\p{L}\p{N} '_,.:?()&\-]*$")
        .expect("label pattern is a valid regex")
});

/// Shared name/title format predicate.
pub fn is_valid_label(value: &str) -> bool {
    LABEL_PATTERN.is_match(value)
}

/// Unwraps a field that must be present in the request body.
pub fn require(field: Option<&str>) -> CoreResult<&str> {
    field.ok_or(CoreError::FieldMissing)
}

pub fn validate_category_name(name: &str) -> CoreResult<()> {
    if is_valid_label(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidCategoryName)
    }
}

pub fn validate_question_title(title: &str) -> CoreResult<()> {
    if is_valid_label(title) {
        Ok(())
    } else {
        Err(CoreError::InvalidTitle)
    }
}

/// Rejects `candidate` when any entity other than `exclude_id` already uses it.
///
/// Matching is exact and case-sensitive across the whole collection.
pub fn ensure_unique<'a, T, I>(
    existing: I,
    candidate: &str,
    exclude_id: Option<&str>,
    conflict: CoreError,
) -> CoreResult<()>
where
    T: Identifiable + NamedEntity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let taken = existing
        .into_iter()
        .filter(|entity| exclude_id != Some(entity.id()))
        .any(|entity| entity.name() == candidate);
    if taken {
        Err(conflict)
    } else {
        Ok(())
    }
}

/// Checks that `parent_id` may receive a child without breaking the depth limit.
pub fn ensure_parent_assignable(categories: &[Category], parent_id: &str) -> CoreResult<()> {
    let parent = categories
        .iter()
        .find(|category| category.id == parent_id)
        .ok_or(CoreError::ParentIdNotFound)?;
    if parent.is_top_level() {
        Ok(())
    } else {
        Err(CoreError::CategoryTooNested)
    }
}

pub fn parse_question_type(raw: &str) -> CoreResult<QuestionType> {
    if raw.is_empty() {
        return Err(CoreError::TypeEmpty);
    }
    QuestionType::parse(raw).ok_or(CoreError::InvalidType)
}

pub fn validate_option_titles(titles: &[String]) -> CoreResult<()> {
    if titles.iter().any(|title| title.trim().is_empty()) {
        return Err(CoreError::OptionEmpty);
    }
    let mut seen = HashSet::with_capacity(titles.len());
    if titles.iter().all(|title| seen.insert(title.as_str())) {
        Ok(())
    } else {
        Err(CoreError::DuplicateOption)
    }
}

/// Resolves the option titles a new question of `kind` should store.
///
/// Returns `None` for kinds that never carry options.
pub fn resolve_option_titles(
    kind: QuestionType,
    options: &OptionsField,
) -> CoreResult<Option<Vec<String>>> {
    match (kind.accepts_options(), options) {
        (false, OptionsField::Absent) => Ok(None),
        (false, _) => Err(CoreError::OptionsInvalid),
        (true, OptionsField::Absent) => Ok(Some(Vec::new())),
        (true, OptionsField::Malformed) => Err(CoreError::OptionsInvalid),
        (true, OptionsField::Titles(titles)) => {
            validate_option_titles(titles)?;
            Ok(Some(titles.clone()))
        }
    }
}

pub fn ensure_ownership<T: BelongsToCategory>(entity: &T, category_id: &str) -> CoreResult<()> {
    if entity.belongs_to(category_id) {
        Ok(())
    } else {
        Err(CoreError::QuestionDoesntBelongToCategory)
    }
}
