use serde::Deserialize;

pub type QuestionId = u32;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub total_quizzes: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub category_id: String,
    #[serde(default)]
    pub meta_description: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub category_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Title without the trailing " - Quiz" some fixtures carry, used in breadcrumbs.
    pub fn short_title(&self) -> &str {
        self.title.strip_suffix(" - Quiz").unwrap_or(&self.title)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingQuiz {
    pub id: String,
    pub title: String,
    pub category: String,
    pub participants: u32,
    pub duration: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub active_users: String,
    pub total_quizzes: String,
    pub categories: String,
    pub user_rating: String,
}

/// Long-form study article attached to a quiz.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContent {
    pub quiz_id: String,
    pub category_id: String,
    #[serde(default)]
    pub subcategory_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub knowledge_graph_html: Option<String>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub generated_by: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl QuizContent {
    /// Records without an explicit `success: false` count as successful.
    pub fn is_successful(&self) -> bool {
        self.success != Some(false)
    }
}

// Fixture file envelopes

#[derive(Deserialize)]
pub(crate) struct CategoriesFile {
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
pub(crate) struct SubcategoriesFile {
    pub subcategories: Vec<Subcategory>,
}

#[derive(Deserialize)]
pub(crate) struct TrendingFile {
    pub trending: Vec<TrendingQuiz>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizContentsFile {
    pub quiz_contents: Vec<QuizContent>,
}
