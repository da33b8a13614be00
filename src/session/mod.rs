//! Quiz-taking state machine for one attempt at one quiz.
//!
//! A session starts `InProgress`, collects answers and reveal toggles, counts
//! elapsed seconds and moves exactly once to `Completed` on a successful
//! submit. Nothing here is persisted.

use std::collections::BTreeMap;

use crate::models::{QuestionId, Quiz};

pub mod registry;

pub use registry::SessionRegistry;

#[derive(Clone, Debug)]
struct AnswerKey {
    question_id: QuestionId,
    options: usize,
    correct: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    /// `None` when the question was never answered; graded as incorrect.
    pub selected: Option<usize>,
    pub correct: usize,
    pub is_correct: bool,
}

/// Frozen outcome of a completed session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub outcomes: Vec<QuestionOutcome>,
    pub correct_count: usize,
    pub total_questions: usize,
    pub score_percentage: u32,
    pub elapsed_seconds: u64,
}

impl QuizResult {
    pub fn outcome(&self, question_id: QuestionId) -> Option<&QuestionOutcome> {
        self.outcomes.iter().find(|o| o.question_id == question_id)
    }

    pub fn verdict(&self) -> Verdict {
        match self.score_percentage {
            80.. => Verdict::Excellent,
            60.. => Verdict::Good,
            _ => Verdict::KeepStudying,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    KeepStudying,
}

#[derive(Clone, Debug)]
enum State {
    InProgress,
    Completed(QuizResult),
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// No answers change once the session is completed.
    AlreadyCompleted,
    UnknownQuestion,
    OptionOutOfRange,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    /// Some questions have no answer yet. Nothing changed.
    Incomplete { missing: Vec<QuestionId> },
    AlreadyCompleted,
}

// ---------------------------------------------------------------------------
// QuizSession
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct QuizSession {
    quiz_id: String,
    key: Vec<AnswerKey>,
    answers: BTreeMap<QuestionId, usize>,
    revealed: BTreeMap<QuestionId, bool>,
    elapsed_seconds: u64,
    state: State,
}

impl QuizSession {
    pub fn new(quiz: &Quiz) -> Self {
        let key = quiz
            .questions
            .iter()
            .map(|q| AnswerKey {
                question_id: q.id,
                options: q.options.len(),
                correct: q.correct_answer,
            })
            .collect();

        Self {
            quiz_id: quiz.id.clone(),
            key,
            answers: BTreeMap::new(),
            revealed: BTreeMap::new(),
            elapsed_seconds: 0,
            state: State::InProgress,
        }
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    /// Records `option` for `question_id`, replacing any earlier choice.
    pub fn select_answer(&mut self, question_id: QuestionId, option: usize) -> SelectOutcome {
        if self.is_completed() {
            return SelectOutcome::AlreadyCompleted;
        }
        let Some(key) = self.key_for(question_id) else {
            return SelectOutcome::UnknownQuestion;
        };
        if option >= key.options {
            return SelectOutcome::OptionOutOfRange;
        }

        self.answers.insert(question_id, option);
        SelectOutcome::Selected
    }

    /// Flips the "show correct answer" flag and returns the new value.
    /// Allowed in both states; never touches the score.
    pub fn toggle_reveal(&mut self, question_id: QuestionId) -> Option<bool> {
        self.key_for(question_id)?;
        let flag = self.revealed.entry(question_id).or_insert(false);
        *flag = !*flag;
        Some(*flag)
    }

    /// Advances the clock by one second while in progress. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_completed() {
            return SubmitOutcome::AlreadyCompleted;
        }

        let missing: Vec<QuestionId> = self
            .key
            .iter()
            .map(|k| k.question_id)
            .filter(|id| !self.answers.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return SubmitOutcome::Incomplete { missing };
        }

        self.state = State::Completed(self.grade());
        SubmitOutcome::Completed
    }

    fn grade(&self) -> QuizResult {
        let outcomes: Vec<QuestionOutcome> = self
            .key
            .iter()
            .map(|k| {
                let selected = self.answers.get(&k.question_id).copied();
                QuestionOutcome {
                    question_id: k.question_id,
                    selected,
                    correct: k.correct,
                    is_correct: selected == Some(k.correct),
                }
            })
            .collect();

        let correct_count = outcomes.iter().filter(|o| o.is_correct).count();
        let total_questions = outcomes.len();

        QuizResult {
            outcomes,
            correct_count,
            total_questions,
            score_percentage: score_percentage(correct_count, total_questions),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    fn key_for(&self, question_id: QuestionId) -> Option<&AnswerKey> {
        self.key.iter().find(|k| k.question_id == question_id)
    }

    pub fn selected(&self, question_id: QuestionId) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, usize> {
        &self.answers
    }

    pub fn is_revealed(&self, question_id: QuestionId) -> bool {
        self.revealed.get(&question_id).copied().unwrap_or(false)
    }

    pub fn revealed(&self) -> &BTreeMap<QuestionId, bool> {
        &self.revealed
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, State::Completed(_))
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            State::Completed(result) => Some(result),
            State::InProgress => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.key.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn remaining(&self) -> usize {
        self.total_questions() - self.answered_count()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_completed() && self.answered_count() == self.total_questions()
    }
}

/// `round(100 * correct / total)` with halves rounded up; 0 for an empty quiz.
pub fn score_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Renders seconds as `m:ss`; minutes are not wrapped into hours.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
