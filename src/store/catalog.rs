use std::collections::{BTreeMap, BTreeSet};

use super::ContentStore;
use crate::models::{Category, Quiz, Stats, Subcategory, TrendingQuiz};

impl ContentStore {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn featured_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.featured)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn quizzes_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Quiz> {
        self.quizzes.iter().filter(move |q| q.category == category_id)
    }

    pub fn quiz_count(&self, category_id: &str) -> usize {
        self.quizzes_in_category(category_id).count()
    }

    /// Quizzes of one category that carry `tag` (exact match) and whose title
    /// or description contains `search` (case-insensitive). Empty filters match
    /// everything.
    pub fn filter_quizzes<'a>(
        &'a self,
        category_id: &'a str,
        tag: Option<&str>,
        search: Option<&str>,
    ) -> Vec<&'a Quiz> {
        let tag = tag.filter(|t| !t.is_empty());
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        self.quizzes_in_category(category_id)
            .filter(|quiz| tag.is_none_or(|tag| quiz.tags.iter().any(|t| t == tag)))
            .filter(|quiz| {
                search.as_deref().is_none_or(|needle| {
                    quiz.title.to_lowercase().contains(needle)
                        || quiz.description.to_lowercase().contains(needle)
                })
            })
            .collect()
    }

    /// Every tag used by any quiz, sorted and without duplicates.
    pub fn all_tags(&self) -> BTreeSet<&str> {
        self.quizzes
            .iter()
            .flat_map(|q| q.tags.iter().map(String::as_str))
            .collect()
    }

    pub fn tags_by_category(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for quiz in &self.quizzes {
            grouped
                .entry(quiz.category.as_str())
                .or_default()
                .extend(quiz.tags.iter().map(String::as_str));
        }
        grouped
    }

    pub fn subcategories_of<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Subcategory> {
        self.subcategories
            .iter()
            .filter(move |s| s.category_id == category_id)
    }

    pub fn trending(&self) -> &[TrendingQuiz] {
        &self.trending
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }
}
