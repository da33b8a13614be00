// Content store - the immutable set of fixtures the site is rendered from

use color_eyre::{eyre::WrapErr, Result};
use serde::de::DeserializeOwned;

use crate::models::{
    CategoriesFile, Category, Quiz, QuizContent, QuizContentsFile, Stats, Subcategory,
    SubcategoriesFile, TrendingFile, TrendingQuiz,
};

mod catalog;
mod content;
mod source;
mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use content::ContentStats;
pub use source::{DirSource, FixtureSource};

#[cfg(test)]
pub use source::MockFixtureSource;

pub const CATEGORIES_FILE: &str = "categories.json";
pub const QUIZZES_FILE: &str = "quizzes.json";
pub const SUBCATEGORIES_FILE: &str = "subcategories.json";
pub const TRENDING_FILE: &str = "trending.json";
pub const STATS_FILE: &str = "stats.json";
pub const QUIZ_CONTENT_FILE: &str = "quiz-content.json";

/// Read-only collection of categories, quizzes and articles.
///
/// Built once at startup and shared through `AppState`; never mutated afterwards.
#[derive(Debug, Default)]
pub struct ContentStore {
    categories: Vec<Category>,
    quizzes: Vec<Quiz>,
    subcategories: Vec<Subcategory>,
    trending: Vec<TrendingQuiz>,
    stats: Option<Stats>,
    contents: Vec<QuizContent>,
}

impl ContentStore {
    /// Loads every fixture from `source` and validates it. Any schema or
    /// consistency problem aborts loading with a descriptive error.
    pub fn load(source: &impl FixtureSource) -> Result<Self> {
        let categories = parse::<CategoriesFile>(CATEGORIES_FILE, require(source, CATEGORIES_FILE)?)?
            .categories;
        let quizzes = parse::<Vec<Quiz>>(QUIZZES_FILE, require(source, QUIZZES_FILE)?)?;

        let subcategories = match source.read(SUBCATEGORIES_FILE)? {
            Some(raw) => parse::<SubcategoriesFile>(SUBCATEGORIES_FILE, raw)?.subcategories,
            None => Vec::new(),
        };
        let trending = match source.read(TRENDING_FILE)? {
            Some(raw) => parse::<TrendingFile>(TRENDING_FILE, raw)?.trending,
            None => Vec::new(),
        };
        let stats = match source.read(STATS_FILE)? {
            Some(raw) => Some(parse::<Stats>(STATS_FILE, raw)?),
            None => None,
        };
        let contents = match source.read(QUIZ_CONTENT_FILE)? {
            Some(raw) => parse::<QuizContentsFile>(QUIZ_CONTENT_FILE, raw)?.quiz_contents,
            None => Vec::new(),
        };

        Self::from_parts(categories, quizzes, subcategories, trending, stats, contents)
    }

    pub fn from_parts(
        categories: Vec<Category>,
        quizzes: Vec<Quiz>,
        subcategories: Vec<Subcategory>,
        trending: Vec<TrendingQuiz>,
        stats: Option<Stats>,
        contents: Vec<QuizContent>,
    ) -> Result<Self> {
        validate::categories(&categories)?;
        validate::quizzes(&quizzes, &categories)?;
        validate::contents(&contents, &quizzes);

        tracing::info!(
            categories = categories.len(),
            quizzes = quizzes.len(),
            subcategories = subcategories.len(),
            articles = contents.len(),
            "content store loaded"
        );

        Ok(Self {
            categories,
            quizzes,
            subcategories,
            trending,
            stats,
            contents,
        })
    }
}

fn require(source: &impl FixtureSource, name: &str) -> Result<String> {
    source
        .read(name)?
        .ok_or_else(|| color_eyre::eyre::eyre!("required fixture {name} is missing"))
}

fn parse<T: DeserializeOwned>(name: &str, raw: String) -> Result<T> {
    serde_json::from_str(&raw).wrap_err_with(|| format!("{name} does not match the expected schema"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATEGORIES: &str = r#"{"categories": [
        {"id": "science", "name": "Science", "description": "d", "icon": "Atom",
         "color": "teal", "tags": ["space"], "featured": true, "totalQuizzes": 1}
    ]}"#;

    fn quizzes_json(options: &str, correct: usize, category: &str) -> String {
        format!(
            r#"[{{"id": "q1", "title": "Quiz", "description": "d", "category": "{category}",
                 "tags": [], "difficulty": "Easy",
                 "questions": [{{"id": 1, "question": "?", "options": {options},
                                 "correctAnswer": {correct}, "explanation": "e"}}]}}]"#
        )
    }

    fn source(files: Vec<(&'static str, String)>) -> MockFixtureSource {
        let mut mock = MockFixtureSource::new();
        mock.expect_read().returning(move |name| {
            Ok(files
                .iter()
                .find(|(file, _)| *file == name)
                .map(|(_, raw)| raw.clone()))
        });
        mock
    }

    #[test]
    fn loads_required_fixtures_and_tolerates_missing_optional_ones() {
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes_json(r#"["a","b","c","d"]"#, 3, "science")),
        ]);

        let store = ContentStore::load(&mock).unwrap();
        assert_eq!(store.quizzes().len(), 1);
        assert!(store.stats().is_none());
        assert!(store.contents().is_empty());
        assert!(store.trending().is_empty());
    }

    #[test]
    fn missing_required_fixture_is_an_error() {
        let mock = source(vec![(CATEGORIES_FILE, CATEGORIES.to_string())]);
        let err = ContentStore::load(&mock).unwrap_err();
        assert!(err.to_string().contains("quizzes.json"));
    }

    #[test]
    fn rejects_questions_without_four_options() {
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes_json(r#"["a","b","c"]"#, 0, "science")),
        ]);
        let err = ContentStore::load(&mock).unwrap_err();
        assert!(err.to_string().contains("3 options"));
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes_json(r#"["a","b","c","d"]"#, 4, "science")),
        ]);
        assert!(ContentStore::load(&mock).is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes_json(r#"["a","b","c","d"]"#, 0, "sports")),
        ]);
        let err = ContentStore::load(&mock).unwrap_err();
        assert!(err.to_string().contains("unknown category 'sports'"));
    }

    #[test]
    fn rejects_quiz_without_questions() {
        let quizzes = r#"[{"id": "q1", "title": "Quiz", "description": "d", "category": "science",
                          "tags": [], "difficulty": "Hard", "questions": []}]"#;
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes.to_string()),
        ]);
        let err = ContentStore::load(&mock).unwrap_err();
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn rejects_malformed_json_with_file_name() {
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, r#"[{"id": "q1"}]"#.to_string()),
        ]);
        let err = ContentStore::load(&mock).unwrap_err();
        assert!(err.to_string().contains("quizzes.json"));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let quizzes = quizzes_json(r#"["a","b","c","d"]"#, 0, "science").replace("Easy", "Extreme");
        let mock = source(vec![
            (CATEGORIES_FILE, CATEGORIES.to_string()),
            (QUIZZES_FILE, quizzes),
        ]);
        assert!(ContentStore::load(&mock).is_err());
    }
}
