//! Best-effort display grouping for quizzes. The result is a heuristic over
//! title and tags, never stored data.

use crate::models::Quiz;

const MOVIE_WORDS: &[&str] = &["movie", "film", "cinema"];
const MOVIE_TAGS: &[&str] = &["movie", "film", "cinema", "actor", "actress", "director"];
const TV_WORDS: &[&str] = &["tv", "television", "series", "show"];
const TV_TAGS: &[&str] = &["tv", "television", "series", "show", "episode"];
const MUSIC_WORDS: &[&str] = &["music", "song", "album", "artist"];
const MUSIC_TAGS: &[&str] = &["music", "song", "album", "artist", "band", "singer", "musician"];

pub fn subcategory_label(quiz: &Quiz) -> String {
    if quiz.category != "entertainment" {
        return capitalize(&quiz.category);
    }

    let title = quiz.title.to_lowercase();
    let tags: Vec<String> = quiz.tags.iter().map(|t| t.to_lowercase()).collect();
    let matches = |words: &[&str], known_tags: &[&str]| {
        words.iter().any(|w| title.contains(w)) || tags.iter().any(|t| known_tags.contains(&t.as_str()))
    };

    if matches(MOVIE_WORDS, MOVIE_TAGS) {
        "Movies".to_string()
    } else if matches(TV_WORDS, TV_TAGS) {
        "TV Shows".to_string()
    } else if matches(MUSIC_WORDS, MUSIC_TAGS) {
        "Music".to_string()
    } else {
        "Movies".to_string()
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
