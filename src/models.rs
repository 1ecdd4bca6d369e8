use crate::errors::ItemError;

/// One declared resource in the package manifest. All five attributes are
/// required by the content-packaging contract.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub file: String,
    pub title: String,
    pub identifier: String,
    pub resource_type: String,
    pub base: String,
}

/// A single answer option, owned by its question.
#[derive(Debug, Clone)]
pub struct Choice {
    pub text: String,
    pub ident: String,
}

impl Choice {
    /// Exact string match on the identifier; no normalization.
    pub fn is_correct(&self, correct_id: &str) -> bool {
        self.ident == correct_id
    }
}

/// One extracted multiple-choice question. `correct_choice_id` is absent
/// when the source item declares no "correct" response condition.
#[derive(Debug, Clone)]
pub struct Mcq {
    pub question: String,
    pub choices: Vec<Choice>,
    pub correct_choice_id: Option<String>,
}

impl Mcq {
    pub fn is_correct_choice(&self, choice: &Choice) -> bool {
        self.correct_choice_id
            .as_deref()
            .is_some_and(|id| choice.is_correct(id))
    }
}

/// Outcome of extracting one item: either a question or a recorded skip.
/// Skips stay in the list so a malformed item is visible, not swallowed.
#[derive(Debug)]
pub enum ItemOutcome {
    Extracted(Mcq),
    Skipped { index: usize, error: ItemError },
}

/// One manifest resource together with the items extracted from its file.
#[derive(Debug)]
pub struct Resource {
    pub entry: ManifestEntry,
    pub items: Vec<ItemOutcome>,
}

impl Resource {
    /// Retained questions, in item order.
    pub fn mcqs(&self) -> impl Iterator<Item = &Mcq> {
        self.items.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Extracted(mcq) => Some(mcq),
            ItemOutcome::Skipped { .. } => None,
        })
    }

    /// Skipped items, in item order.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &ItemError)> {
        self.items.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Extracted(_) => None,
            ItemOutcome::Skipped { index, error } => Some((*index, error)),
        })
    }
}
