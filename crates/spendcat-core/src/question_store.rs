use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use spendcat_domain::{BelongsToCategory, Question, QuestionList, QuestionOption};
use tracing::{debug, info};

use crate::draft::QuestionDraft;
use crate::error::{CoreError, CoreResult};
use crate::id::{IdGenerator, TimeOrderedIds};
use crate::validation;

/// In-memory owner of the question collection (and, through it, the options).
///
/// The store never looks at categories: whether `category_id` exists is the
/// caller's concern. Locking follows [`crate::CategoryStore`].
pub struct QuestionStore {
    questions: Mutex<Vec<Question>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new(Arc::new(TimeOrderedIds))
    }
}

impl QuestionStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_questions(Vec::new(), ids)
    }

    pub fn with_questions(questions: Vec<Question>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            questions: Mutex::new(questions),
            ids,
        }
    }

    pub fn add(&self, category_id: &str, draft: QuestionDraft) -> CoreResult<Question> {
        let mut questions = self.lock();

        if draft.title.is_empty() {
            return Err(CoreError::TitleEmpty);
        }
        validation::validate_question_title(&draft.title)?;
        validation::ensure_unique(questions.iter(), &draft.title, None, CoreError::DuplicateTitle)?;
        let kind = validation::parse_question_type(&draft.kind)?;
        let option_titles = validation::resolve_option_titles(kind, &draft.options)?;

        let mut question = Question::new(self.ids.next_id(), draft.title, category_id, kind);
        question.options = option_titles.map(|titles| {
            titles
                .into_iter()
                .map(|title| QuestionOption::new(self.ids.next_id(), title))
                .collect()
        });
        questions.push(question.clone());
        info!(
            "question `{}` ({}) added to category {} as {}",
            question.title, question.kind, question.category_id, question.id
        );
        Ok(question)
    }

    pub fn rename(&self, category_id: &str, id: &str, title: Option<&str>) -> CoreResult<Question> {
        let mut questions = self.lock();

        let title = validation::require(title)?;
        validation::validate_question_title(title)?;
        validation::ensure_unique(questions.iter(), title, Some(id), CoreError::DuplicateTitle)?;
        let question = questions
            .iter_mut()
            .find(|question| question.id == id)
            .ok_or(CoreError::QuestionNotFound)?;
        validation::ensure_ownership(&*question, category_id)?;

        debug!("renaming question {} from `{}` to `{}`", id, question.title, title);
        question.title = title.to_string();
        Ok(question.clone())
    }

    pub fn remove(&self, category_id: &str, id: &str) -> CoreResult<()> {
        let mut questions = self.lock();

        let position = questions
            .iter()
            .position(|question| question.id == id)
            .ok_or(CoreError::QuestionNotFound)?;
        validation::ensure_ownership(&questions[position], category_id)?;

        let removed = questions.remove(position);
        info!("question `{}` removed ({})", removed.title, removed.id);
        Ok(())
    }

    /// Fetches a question, checking it belongs to `category_id`.
    pub fn get(&self, category_id: &str, id: &str) -> CoreResult<Question> {
        let questions = self.lock();
        let question = questions
            .iter()
            .find(|question| question.id == id)
            .ok_or(CoreError::QuestionNotFound)?;
        validation::ensure_ownership(question, category_id)?;
        Ok(question.clone())
    }

    pub fn list_all(&self) -> QuestionList {
        QuestionList::from(self.lock().clone())
    }

    /// Questions scoped to `category_id`; empty (not an error) when none match.
    pub fn list_for_category(&self, category_id: &str) -> QuestionList {
        self.lock()
            .iter()
            .filter(|question| question.belongs_to(category_id))
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    pub fn references_category(&self, category_id: &str) -> bool {
        self.lock()
            .iter()
            .any(|question| question.belongs_to(category_id))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn replace_all(&self, questions: Vec<Question>) -> Vec<Question> {
        std::mem::replace(&mut *self.lock(), questions)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Question>> {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use spendcat_domain::QuestionType;

    use super::*;
    use crate::id::SequentialIds;

    fn seeded() -> QuestionStore {
        QuestionStore::with_questions(
            vec![
                Question::new("1", "how many nuggets?", "1234", QuestionType::Number),
                Question::new("2", "how much nougat?", "1234", QuestionType::Number),
                Question::new("3", "which meal?", "2345", QuestionType::String)
                    .with_options(vec![QuestionOption::new("1", "brekkie")]),
            ],
            Arc::new(SequentialIds::new("q")),
        )
    }

    #[test]
    fn add_string_question_assigns_option_ids() {
        let store = QuestionStore::new(Arc::new(SequentialIds::new("q")));

        let question = store
            .add(
                "1",
                QuestionDraft::new("which meal?", "string").with_options(["brekkie", "lunch"]),
            )
            .expect("add string question");

        assert_eq!(question.id, "q-1");
        let options = question.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], QuestionOption::new("q-2", "brekkie"));
        assert_eq!(options[1], QuestionOption::new("q-3", "lunch"));
        assert_eq!(store.list_all().questions, vec![question]);
    }

    #[test]
    fn add_number_question_has_no_options() {
        let store = QuestionStore::default();

        let question = store
            .add("1", QuestionDraft::new("how many nights?", "number"))
            .expect("add number question");

        assert_eq!(question.kind, QuestionType::Number);
        assert!(question.options.is_none());
    }

    #[test]
    fn add_rejections_leave_store_unchanged() {
        let store = seeded();
        let before = store.list_all();

        let cases = [
            (QuestionDraft::new("", "number"), CoreError::TitleEmpty),
            (QuestionDraft::new("foo/*!bar", "number"), CoreError::InvalidTitle),
            (QuestionDraft::new("how many nuggets?", "number"), CoreError::DuplicateTitle),
            (QuestionDraft::new("foo", ""), CoreError::TypeEmpty),
            (QuestionDraft::new("foo", "foo"), CoreError::InvalidType),
            (
                QuestionDraft::new("foo", "string").with_malformed_options(),
                CoreError::OptionsInvalid,
            ),
            (
                QuestionDraft::new("foo", "number").with_options(["one"]),
                CoreError::OptionsInvalid,
            ),
            (
                QuestionDraft::new("foo", "string").with_options(["foo", "foo"]),
                CoreError::DuplicateOption,
            ),
            (
                QuestionDraft::new("foo", "string").with_options([""]),
                CoreError::OptionEmpty,
            ),
        ];

        for (draft, expected) in cases {
            assert_eq!(store.add("1234", draft.clone()), Err(expected), "{draft:?}");
            assert_eq!(store.list_all(), before);
        }
    }

    #[test]
    fn rename_checks_format_uniqueness_and_ownership() {
        let store = seeded();
        let before = store.list_all();

        assert_eq!(store.rename("1234", "1", None), Err(CoreError::FieldMissing));
        assert_eq!(
            store.rename("1234", "1", Some("foo/*!bar")),
            Err(CoreError::InvalidTitle)
        );
        assert_eq!(
            store.rename("1234", "1", Some("how much nougat?")),
            Err(CoreError::DuplicateTitle)
        );
        assert_eq!(
            store.rename("1234", "4", Some("irrelevant")),
            Err(CoreError::QuestionNotFound)
        );
        assert_eq!(
            store.rename("1234", "3", Some("irrelevant")),
            Err(CoreError::QuestionDoesntBelongToCategory)
        );
        assert_eq!(store.list_all(), before);

        let renamed = store
            .rename("1234", "1", Some("whattup world?"))
            .expect("rename");
        assert_eq!(renamed.title, "whattup world?");
        assert_eq!(renamed.kind, QuestionType::Number);
    }

    #[test]
    fn remove_requires_ownership() {
        let store = seeded();

        assert_eq!(
            store.remove("1234", "3"),
            Err(CoreError::QuestionDoesntBelongToCategory)
        );
        assert_eq!(store.remove("1234", "9"), Err(CoreError::QuestionNotFound));
        assert_eq!(store.len(), 3);

        store.remove("2345", "3").expect("remove owned question");
        assert!(store.list_for_category("2345").questions.is_empty());
    }

    #[test]
    fn list_for_category_filters_by_reference() {
        let store = seeded();

        assert_eq!(store.list_for_category("1234").questions.len(), 2);
        assert!(store.list_for_category("9999").questions.is_empty());
        assert!(store.references_category("2345"));
        assert!(!store.references_category("9999"));
    }
}
