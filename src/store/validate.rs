use std::collections::HashSet;

use color_eyre::{
    eyre::{bail, ensure},
    Result,
};

use crate::models::{Category, Quiz, QuizContent};

pub const OPTIONS_PER_QUESTION: usize = 4;

pub(super) fn categories(categories: &[Category]) -> Result<()> {
    let mut seen = HashSet::new();
    for category in categories {
        ensure!(!category.id.is_empty(), "category '{}' has an empty id", category.name);
        ensure!(
            seen.insert(category.id.as_str()),
            "duplicate category id '{}'",
            category.id
        );
    }
    Ok(())
}

pub(super) fn quizzes(quizzes: &[Quiz], categories: &[Category]) -> Result<()> {
    let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();

    for quiz in quizzes {
        ensure!(!quiz.id.is_empty(), "quiz '{}' has an empty id", quiz.title);
        ensure!(seen.insert(quiz.id.as_str()), "duplicate quiz id '{}'", quiz.id);
        ensure!(
            category_ids.contains(quiz.category.as_str()),
            "quiz '{}' references unknown category '{}'",
            quiz.id,
            quiz.category
        );
        if quiz.questions.is_empty() {
            bail!("quiz '{}' has no questions", quiz.id);
        }

        let mut question_ids = HashSet::new();
        for question in &quiz.questions {
            ensure!(
                question_ids.insert(question.id),
                "quiz '{}' repeats question id {}",
                quiz.id,
                question.id
            );
            ensure!(
                question.options.len() == OPTIONS_PER_QUESTION,
                "quiz '{}' question {} has {} options, expected {OPTIONS_PER_QUESTION}",
                quiz.id,
                question.id,
                question.options.len()
            );
            ensure!(
                question.correct_answer < question.options.len(),
                "quiz '{}' question {} marks option {} as correct but has only {} options",
                quiz.id,
                question.id,
                question.correct_answer,
                question.options.len()
            );
        }
    }
    Ok(())
}

/// Articles for unknown quizzes are kept, only reported.
pub(super) fn contents(contents: &[QuizContent], quizzes: &[Quiz]) {
    let quiz_ids: HashSet<&str> = quizzes.iter().map(|q| q.id.as_str()).collect();
    for content in contents {
        if !quiz_ids.contains(content.quiz_id.as_str()) {
            tracing::warn!("article '{}' belongs to unknown quiz '{}'", content.title, content.quiz_id);
        }
    }
}
