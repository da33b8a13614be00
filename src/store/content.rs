use std::collections::BTreeSet;

use super::ContentStore;
use crate::models::QuizContent;

/// Aggregate numbers over the article collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ContentStats {
    pub total_content: usize,
    pub successful_content: usize,
    pub total_words: u64,
    pub categories_with_content: BTreeSet<String>,
    pub subcategories_with_content: BTreeSet<String>,
}

impl ContentStore {
    pub fn contents(&self) -> &[QuizContent] {
        &self.contents
    }

    pub fn content_for_quiz(&self, quiz_id: &str) -> Option<&QuizContent> {
        self.contents.iter().find(|c| c.quiz_id == quiz_id)
    }

    pub fn content_by_category(&self, category_id: &str) -> Vec<&QuizContent> {
        self.contents
            .iter()
            .filter(|c| c.category_id == category_id)
            .collect()
    }

    pub fn content_by_subcategory(&self, category_id: &str, subcategory_id: &str) -> Vec<&QuizContent> {
        self.contents
            .iter()
            .filter(|c| c.category_id == category_id && c.subcategory_id == subcategory_id)
            .collect()
    }

    /// Case-insensitive substring search over title, body, category and subcategory.
    pub fn search_content(&self, keyword: &str) -> Vec<&QuizContent> {
        let needle = keyword.to_lowercase();
        self.contents
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.content.to_lowercase().contains(&needle)
                    || c.category_id.to_lowercase().contains(&needle)
                    || c.subcategory_id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn content_stats(&self) -> ContentStats {
        ContentStats {
            total_content: self.contents.len(),
            successful_content: self.contents.iter().filter(|c| c.is_successful()).count(),
            total_words: self.contents.iter().map(|c| c.word_count).sum(),
            categories_with_content: self.contents.iter().map(|c| c.category_id.clone()).collect(),
            subcategories_with_content: self
                .contents
                .iter()
                .map(|c| c.subcategory_id.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::fixtures;

    #[test]
    fn content_for_quiz_is_optional() {
        let store = fixtures::store();
        assert_eq!(store.content_for_quiz("solar-system").unwrap().title, "Our Solar System");
        assert!(store.content_for_quiz("nope").is_none());
    }

    #[test]
    fn content_filters_by_category_and_subcategory() {
        let store = fixtures::store();
        assert_eq!(store.content_by_category("science").len(), 2);
        assert_eq!(store.content_by_subcategory("science", "astronomy").len(), 1);
        assert!(store.content_by_subcategory("entertainment", "astronomy").is_empty());
    }

    #[test]
    fn search_matches_every_field_ignoring_case() {
        let store = fixtures::store();
        assert_eq!(store.search_content("GOLDEN").len(), 1);
        assert_eq!(store.search_content("biology").len(), 1);
        assert_eq!(store.search_content("entertain").len(), 1);
        assert_eq!(store.search_content("some text").len(), 3);
        assert!(store.search_content("zebra").is_empty());
    }

    #[test]
    fn stats_count_successes_and_distinct_ids() {
        let stats = fixtures::store().content_stats();
        assert_eq!(stats.total_content, 3);
        assert_eq!(stats.successful_content, 2);
        assert_eq!(stats.total_words, 250);
        assert_eq!(stats.categories_with_content.len(), 2);
        assert_eq!(
            stats.subcategories_with_content.into_iter().collect::<Vec<_>>(),
            ["astronomy", "biology", "movies"]
        );
    }
}
