use std::{collections::HashSet, io, path::Path};

use spendcat_domain::Snapshot;
use thiserror::Error;

use crate::validation;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Abstraction over backends able to import and export store contents.
pub trait SnapshotStorage: Send + Sync {
    fn save_snapshot(&self, path: &Path, snapshot: &Snapshot) -> Result<(), StorageError>;
    fn load_snapshot(&self, path: &Path) -> Result<Snapshot, StorageError>;
}

/// Detects dangling references and broken invariants within a snapshot.
///
/// Seeded data is trusted, so these are reported rather than rejected.
pub fn snapshot_warnings(snapshot: &Snapshot) -> Vec<String> {
    let mut warnings = Vec::new();
    let category_ids: HashSet<&str> = snapshot
        .categories
        .iter()
        .map(|category| category.id.as_str())
        .collect();

    for category in &snapshot.categories {
        if !validation::is_valid_label(&category.name) {
            warnings.push(format!(
                "category {} has an invalid name `{}`",
                category.id, category.name
            ));
        }
        if category.is_top_level() {
            continue;
        }
        match snapshot
            .categories
            .iter()
            .find(|parent| parent.id == category.parent_id)
        {
            None => warnings.push(format!(
                "category {} references missing parent {}",
                category.id, category.parent_id
            )),
            Some(parent) if !parent.is_top_level() => warnings.push(format!(
                "category {} is nested more than two levels deep",
                category.id
            )),
            Some(_) => {}
        }
    }

    for question in &snapshot.questions {
        if !category_ids.contains(question.category_id.as_str()) {
            warnings.push(format!(
                "question {} references missing category {}",
                question.id, question.category_id
            ));
        }
        if question.options.is_some() && !question.kind.accepts_options() {
            warnings.push(format!(
                "question {} carries options but has type {}",
                question.id, question.kind
            ));
        }
    }

    warnings.extend(
        duplicates(snapshot.categories.iter().map(|c| c.name.as_str()))
            .map(|name| format!("category name `{}` is used more than once", name)),
    );
    warnings.extend(
        duplicates(snapshot.questions.iter().map(|q| q.title.as_str()))
            .map(|title| format!("question title `{}` is used more than once", title)),
    );
    warnings
}

fn duplicates<'a>(labels: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    labels
        .filter(|label| !seen.insert(*label) && reported.insert(*label))
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use spendcat_domain::{Category, Question, QuestionOption, QuestionType};

    use super::*;

    #[test]
    fn clean_snapshot_has_no_warnings() {
        let snapshot = Snapshot::new(
            vec![
                Category::new("1234", "accommodation"),
                Category::new("abcdef", "hostel").with_parent("1234"),
            ],
            vec![Question::new("1", "how many nights?", "abcdef", QuestionType::Number)],
        );

        assert!(snapshot_warnings(&snapshot).is_empty());
    }

    #[test]
    fn dangling_references_and_duplicates_are_reported() {
        let mut number = Question::new("3", "how much nougat?", "2345", QuestionType::Number);
        number.options = Some(vec![QuestionOption::new("1", "lots")]);
        let snapshot = Snapshot::new(
            vec![
                Category::new("1234", "foo"),
                Category::new("2345", "bar").with_parent("1234"),
                Category::new("3456", "baz").with_parent("2345"),
                Category::new("4567", "qux").with_parent("9999"),
            ],
            vec![
                Question::new("1", "how much nougat?", "1234", QuestionType::Number),
                Question::new("2", "which meal?", "5678", QuestionType::String),
                number,
            ],
        );

        let warnings = snapshot_warnings(&snapshot);

        assert_eq!(warnings.len(), 5, "{warnings:#?}");
        assert!(warnings.iter().any(|w| w.contains("3456 is nested")));
        assert!(warnings.iter().any(|w| w.contains("missing parent 9999")));
        assert!(warnings.iter().any(|w| w.contains("missing category 5678")));
        assert!(warnings.iter().any(|w| w.contains("carries options")));
        assert!(warnings
            .iter()
            .any(|w| w.contains("`how much nougat?` is used more than once")));
    }
}
