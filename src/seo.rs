//! Page metadata, sitemap and robots.txt.

use maud::{html, PreEscaped};

use crate::{
    config::SiteConfig,
    models::{Category, Quiz},
    names,
    store::ContentStore,
};

pub const INDEX_FOLLOW: &str = "index, follow";
pub const NOINDEX_NOFOLLOW: &str = "noindex, nofollow";

#[derive(Clone, Debug, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
}

/// Everything that goes into a page's `<head>` besides assets.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Absolute canonical URL, `None` for pages that should not be indexed.
    pub canonical: Option<String>,
    pub robots: &'static str,
    pub open_graph: Option<OpenGraph>,
}

impl PageMeta {
    fn indexed(site: &SiteConfig, path: &str, title: String, og_title: String, description: String) -> Self {
        let url = site.absolute(path);
        Self {
            open_graph: Some(OpenGraph {
                title: og_title,
                description: description.clone(),
                url: url.clone(),
                site_name: site.site_name.clone(),
            }),
            title,
            description,
            keywords: Vec::new(),
            canonical: Some(url),
            robots: INDEX_FOLLOW,
        }
    }

    fn keywords(mut self, keywords: impl IntoIterator<Item = String>) -> Self {
        self.keywords.extend(keywords);
        self
    }

    /// Metadata for a missing quiz or category.
    pub fn not_found(kind: &str) -> Self {
        Self {
            title: format!("{kind} Not Found"),
            description: format!("The requested {} could not be found.", kind.to_lowercase()),
            keywords: Vec::new(),
            canonical: None,
            robots: NOINDEX_NOFOLLOW,
            open_graph: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            title: message.to_string(),
            description: String::new(),
            keywords: Vec::new(),
            canonical: None,
            robots: NOINDEX_NOFOLLOW,
            open_graph: None,
        }
    }
}

pub fn home_meta(site: &SiteConfig) -> PageMeta {
    let description = "Challenge your mind with hundreds of interactive trivia quizzes covering movies, TV, music, technology, history, and science. Free brain training games with instant feedback.".to_string();
    PageMeta::indexed(
        site,
        names::HOME_URL,
        format!("{} - Interactive Trivia Quizzes & Knowledge Tests", site.site_name),
        format!("{} - Interactive Trivia Quizzes", site.site_name),
        description,
    )
    .keywords(
        ["trivia quiz", "knowledge test", "brain training", "interactive quiz", "trivia questions"]
            .map(String::from),
    )
}

pub fn categories_meta(site: &SiteConfig) -> PageMeta {
    PageMeta::indexed(
        site,
        names::CATEGORIES_URL,
        format!("Trivia Categories - Browse All Quiz Topics | {}", site.site_name),
        "Trivia Categories".to_string(),
        "Explore every trivia category and pick a quiz that matches your interests.".to_string(),
    )
}

pub fn all_topics_meta(site: &SiteConfig) -> PageMeta {
    PageMeta::indexed(
        site,
        names::ALL_TOPICS_URL,
        format!("All Topics - Trivia Quiz Browser | {}", site.site_name),
        "All Topics - Trivia Quiz Browser".to_string(),
        "Browse all available trivia topics and tags. Find quizzes by your favorite subjects including movies, TV shows, music, technology, history, science and more.".to_string(),
    )
    .keywords(["trivia topics", "quiz categories", "trivia tags", "quiz browser"].map(String::from))
}

pub fn about_meta(site: &SiteConfig) -> PageMeta {
    PageMeta::indexed(
        site,
        names::ABOUT_URL,
        format!("About Us | {}", site.site_name),
        format!("About {}", site.site_name),
        format!("Learn about {} and how our interactive trivia quizzes are made.", site.site_name),
    )
}

pub fn category_meta(site: &SiteConfig, category: &Category, quiz_count: usize) -> PageMeta {
    let name = &category.name;
    let lower = name.to_lowercase();
    let title = format!("{name} Trivia - Interactive {name} Quizzes | {}", site.site_name);
    let description = format!(
        "Challenge yourself with {lower} trivia quizzes. Test your knowledge across {quiz_count} interactive {lower} questions with instant feedback and detailed explanations."
    );

    PageMeta::indexed(site, &names::category_url(&category.id), title.clone(), title, description)
        .keywords([
            format!("{lower} trivia"),
            format!("{lower} quiz"),
            "interactive quiz".to_string(),
            "knowledge test".to_string(),
            "brain training".to_string(),
        ])
}

pub fn quiz_meta(site: &SiteConfig, quiz: &Quiz) -> PageMeta {
    let description = quiz
        .meta_description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "{} Test your knowledge with this interactive {} trivia quiz featuring {} challenging questions.",
                quiz.description,
                quiz.category,
                quiz.questions.len()
            )
        });

    let mut meta = PageMeta::indexed(
        site,
        &names::quiz_page_url(&quiz.id),
        format!("{} - Interactive Trivia Quiz | {}", quiz.title, site.site_name),
        format!("{} - Interactive Trivia Quiz", quiz.title),
        description,
    )
    .keywords([
        quiz.title.clone(),
        format!("{} quiz", quiz.category),
        "trivia".to_string(),
        "interactive quiz".to_string(),
        "knowledge test".to_string(),
    ])
    .keywords(quiz.tags.iter().cloned());

    if let Some(og) = meta.open_graph.as_mut() {
        og.description = quiz.description.clone();
    }
    meta
}

// ---------------------------------------------------------------------------
// Sitemap / robots
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: &'static str,
    pub priority: &'static str,
}

pub fn sitemap_entries(site: &SiteConfig, store: &ContentStore) -> Vec<SitemapEntry> {
    let entry = |path: &str, change_frequency, priority| SitemapEntry {
        loc: site.absolute(path),
        change_frequency,
        priority,
    };

    let mut entries = vec![
        entry(names::HOME_URL, "weekly", "1.0"),
        entry(names::CATEGORIES_URL, "weekly", "0.8"),
        entry(names::ABOUT_URL, "monthly", "0.5"),
        entry(names::ALL_TOPICS_URL, "weekly", "0.7"),
    ];
    entries.extend(
        store
            .categories()
            .iter()
            .map(|c| entry(&names::category_url(&c.id), "weekly", "0.7")),
    );
    entries.extend(
        store
            .quizzes()
            .iter()
            .map(|q| entry(&names::quiz_page_url(&q.id), "monthly", "0.6")),
    );
    entries
}

pub fn sitemap_xml(site: &SiteConfig, store: &ContentStore) -> String {
    html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for entry in sitemap_entries(site, store) {
                url {
                    loc { (entry.loc) }
                    changefreq { (entry.change_frequency) }
                    priority { (entry.priority) }
                }
            }
        }
    }
    .into_string()
}

/// Query-string URLs are duplicates of their canonical pages and stay out of the index.
pub fn robots_txt(site: &SiteConfig) -> String {
    let disallow = [
        "/all-topics/?*",
        "/categories/?*",
        "/*?tag=*",
        "/*?category=*",
        "/*?filter=*",
        "/*?search=*",
        "/*?*",
    ];

    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in disallow {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str(&format!("\nSitemap: {}\n", site.absolute(names::SITEMAP_URL)));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn quiz_meta_uses_template_description_and_tags() {
        let site = SiteConfig::default();
        let store = fixtures::store();
        let meta = quiz_meta(&site, store.quiz("solar-system").unwrap());

        assert_eq!(meta.title, "Solar System - Interactive Trivia Quiz | Triviaziggle");
        assert_eq!(
            meta.description,
            "All about solar system Test your knowledge with this interactive science trivia quiz featuring 3 challenging questions."
        );
        assert!(meta.keywords.contains(&"space".to_string()));
        assert_eq!(meta.canonical.as_deref(), Some("https://triviaziggle.com/quiz/solar-system"));
        assert_eq!(meta.robots, INDEX_FOLLOW);
        assert_eq!(meta.open_graph.unwrap().description, "All about solar system");
    }

    #[test]
    fn quiz_meta_prefers_stored_meta_description() {
        let site = SiteConfig::default();
        let mut quiz = fixtures::store().quiz("solar-system").unwrap().clone();
        quiz.meta_description = Some("Eight planets, one star.".to_string());
        assert_eq!(quiz_meta(&site, &quiz).description, "Eight planets, one star.");
    }

    #[test]
    fn category_meta_counts_quizzes() {
        let site = SiteConfig::new("https://example.org/", "Example");
        let store = fixtures::store();
        let meta = category_meta(&site, store.category("science").unwrap(), 2);

        assert_eq!(meta.title, "Science Trivia - Interactive Science Quizzes | Example");
        assert!(meta.description.contains("across 2 interactive science questions"));
        assert_eq!(meta.canonical.as_deref(), Some("https://example.org/science"));
    }

    #[test]
    fn category_meta_ignores_stored_description() {
        let site = SiteConfig::new("https://example.org/", "Example");
        let mut category = fixtures::store().category("science").unwrap().clone();
        category.meta_description = Some("Stored text.".to_string());

        let meta = category_meta(&site, &category, 7);
        assert!(meta.description.contains("across 7 interactive science questions"));
        assert!(!meta.description.contains("Stored text."));
    }

    #[test]
    fn not_found_is_not_indexed() {
        let meta = PageMeta::not_found("Quiz");
        assert_eq!(meta.title, "Quiz Not Found");
        assert_eq!(meta.description, "The requested quiz could not be found.");
        assert_eq!(meta.robots, NOINDEX_NOFOLLOW);
        assert!(meta.canonical.is_none());
    }

    #[test]
    fn sitemap_lists_static_category_and_quiz_pages() {
        let site = SiteConfig::default();
        let store = fixtures::store();
        let entries = sitemap_entries(&site, &store);

        assert_eq!(entries.len(), 4 + 3 + 3);
        assert_eq!(entries[0].loc, "https://triviaziggle.com");
        assert!(entries.iter().any(|e| e.loc == "https://triviaziggle.com/history"));

        let xml = sitemap_xml(&site, &store);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://triviaziggle.com/quiz/movie-classics</loc>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt(&SiteConfig::default());
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Disallow: /*?tag=*\n"));
        assert!(robots.ends_with("Sitemap: https://triviaziggle.com/sitemap.xml\n"));
    }
}
