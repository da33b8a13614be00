//! Small in-memory catalog shared by the unit tests.

use super::ContentStore;
use crate::models::{Category, Difficulty, Question, Quiz, QuizContent, Subcategory};

pub fn category(id: &str, name: &str, featured: bool) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} questions"),
        meta_description: None,
        icon: "BookOpen".to_string(),
        color: "purple".to_string(),
        tags: Vec::new(),
        featured,
        total_quizzes: 0,
    }
}

pub fn question(id: u32, correct_answer: usize) -> Question {
    Question {
        id,
        question: format!("Question {id}?"),
        options: ["A", "B", "C", "D"].map(String::from).to_vec(),
        correct_answer,
        explanation: format!("Because of {id}."),
    }
}

pub fn quiz(id: &str, title: &str, category: &str, tags: &[&str], questions: Vec<Question>) -> Quiz {
    Quiz {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("All about {}", title.to_lowercase()),
        meta_description: None,
        category: category.to_string(),
        category_description: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty: Difficulty::Medium,
        questions,
    }
}

pub fn content(quiz_id: &str, category_id: &str, subcategory_id: &str, title: &str) -> QuizContent {
    QuizContent {
        quiz_id: quiz_id.to_string(),
        category_id: category_id.to_string(),
        subcategory_id: subcategory_id.to_string(),
        title: title.to_string(),
        content: format!("## {title}\n\nSome text about {title}."),
        knowledge_graph_html: None,
        last_updated: "2025-01-01".to_string(),
        word_count: 100,
        generated_by: "editor".to_string(),
        success: None,
        error: None,
    }
}

pub fn store() -> ContentStore {
    let categories = vec![
        category("science", "Science", true),
        category("entertainment", "Entertainment", false),
        category("history", "History", false),
    ];

    let mut body = quiz(
        "human-body",
        "Human Body",
        "science",
        &["anatomy"],
        vec![question(1, 0), question(2, 1)],
    );
    body.description = "Bones, muscles and organs".to_string();

    let quizzes = vec![
        quiz(
            "solar-system",
            "Solar System",
            "science",
            &["space", "planets"],
            vec![question(1, 2), question(2, 0), question(3, 3)],
        ),
        body,
        quiz(
            "movie-classics",
            "Movie Classics",
            "entertainment",
            &["film"],
            vec![question(1, 1)],
        ),
    ];

    let subcategories = vec![Subcategory {
        id: "astronomy".to_string(),
        name: "Astronomy".to_string(),
        category_id: "science".to_string(),
        meta_description: None,
    }];

    let mut failed = content("human-body", "science", "biology", "The Human Body");
    failed.success = Some(false);
    failed.word_count = 50;

    let contents = vec![
        content("solar-system", "science", "astronomy", "Our Solar System"),
        failed,
        content("movie-classics", "entertainment", "movies", "Golden Age Cinema"),
    ];

    ContentStore::from_parts(categories, quizzes, subcategories, Vec::new(), None, contents)
        .expect("fixture store is valid")
}
