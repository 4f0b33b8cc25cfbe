// src/view_models.rs
//
// Proyecciones puras del estado para la capa de UI. Nada aquí es fuente de verdad.

use crate::catalog::{ListQuery, Selection};
use crate::model::{Difficulty, Question, QuestionId, View};

pub const NO_RESULTS: &str = "No questions found";
pub const ELLIPSIS: &str = "...";

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    pub id: QuestionId,
    pub title: String,
    pub difficulty: Difficulty,
    pub preview: String,
    pub avg_time: String,
    pub attempts: String,
    pub success: String,
    pub companies: Vec<String>,
    pub saved: bool,
}

impl QuestionCard {
    pub fn new(q: &Question, preview_chars: usize, saved: bool) -> Self {
        Self {
            id: q.id,
            title: q.title.clone(),
            difficulty: q.difficulty,
            preview: preview(&q.description, preview_chars),
            avg_time: format!("{} min", minutes(q.avg_time)),
            attempts: attempts_label(q.attempts),
            success: format!("{}%", q.success_rate),
            companies: q.companies.iter().map(|c| company_label(c)).collect(),
            saved,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListingView {
    Empty { message: &'static str },
    Cards(Vec<QuestionCard>),
}

impl ListingView {
    pub fn build(
        questions: &[&Question],
        preview_chars: usize,
        is_saved: impl Fn(QuestionId) -> bool,
    ) -> Self {
        if questions.is_empty() {
            return ListingView::Empty {
                message: NO_RESULTS,
            };
        }
        ListingView::Cards(
            questions
                .iter()
                .map(|q| QuestionCard::new(q, preview_chars, is_saved(q.id)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            ListingView::Empty { .. } => 0,
            ListingView::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ficha completa de la vista de detalle
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionDetail {
    pub id: QuestionId,
    pub title: String,
    pub difficulty: Difficulty,
    pub topic: &'static str,
    pub description: String,
    pub attempts: String,
    pub success: String,
    pub avg_time: String,
    pub companies: Vec<String>,
    pub hints: Vec<String>,
}

impl QuestionDetail {
    pub fn new(q: &Question) -> Self {
        Self {
            id: q.id,
            title: q.title.clone(),
            difficulty: q.difficulty,
            topic: q.topic.label(),
            description: q.description.clone(),
            attempts: attempts_label(q.attempts),
            success: format!("{}% success rate", q.success_rate),
            avg_time: format!("{} min avg time", minutes(q.avg_time)),
            companies: q.companies.iter().map(|c| company_label(c)).collect(),
            hints: q.hints.clone(),
        }
    }
}

/// Recorta la descripción a `max_chars` caracteres (no bytes) y añade "..." si hizo falta
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// `12500` → `"12.5k attempts"`
pub fn attempts_label(attempts: u32) -> String {
    format!("{:.1}k attempts", attempts as f64 / 1000.0)
}

fn minutes(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// `"meta"` → `"Meta"`
pub fn company_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn breadcrumb(view: View) -> [&'static str; 2] {
    ["Home", view.title()]
}

/// Cabecera de la lista de práctica según la consulta activa
pub fn listing_header(query: &ListQuery) -> String {
    match query {
        ListQuery::All => "All questions".to_string(),
        ListQuery::Topic(topic) => format!("{} questions", topic.label()),
        ListQuery::Company(company) => format!("Asked at {}", company_label(company)),
        ListQuery::Search(text) => format!("Results for \"{text}\""),
        ListQuery::Filters(criteria) => {
            let topic = match criteria.topic {
                Selection::All => "All topics",
                Selection::Only(t) => t.label(),
            };
            let difficulty = match criteria.difficulty {
                Selection::All => "any difficulty",
                Selection::Only(d) => d.as_str(),
            };
            format!("{topic}, {difficulty}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;
    use crate::model::Topic;

    #[test]
    fn long_descriptions_are_cut_with_an_ellipsis() {
        let text = "a".repeat(150);
        let p = preview(&text, 100);
        assert_eq!(p.chars().count(), 103);
        assert!(p.ends_with("..."));
        assert_eq!(preview("short", 100), "short");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "ñ".repeat(10);
        assert_eq!(preview(&text, 4), "ññññ...");
    }

    #[test]
    fn cards_carry_the_formatted_labels() {
        let catalog = fixture();
        let q = catalog.get(1).unwrap();
        let card = QuestionCard::new(q, 100, true);
        assert_eq!(card.attempts, "12.5k attempts");
        assert_eq!(card.success, "78%");
        assert_eq!(card.avg_time, "45 min");
        assert_eq!(card.companies, ["Google", "Amazon", "Meta"]);
        assert!(card.saved);

        let detail = QuestionDetail::new(q);
        assert_eq!(detail.success, "78% success rate");
        assert_eq!(detail.avg_time, "45 min avg time");
        assert_eq!(detail.topic, "Python");
    }

    #[test]
    fn empty_listing_shows_the_placeholder() {
        let catalog = fixture();
        let none = catalog.search("nothing like this");
        assert_eq!(
            ListingView::build(&none, 100, |_| false),
            ListingView::Empty {
                message: "No questions found"
            }
        );
        let all: Vec<_> = catalog.all().iter().collect();
        assert_eq!(ListingView::build(&all, 100, |_| false).len(), 3);
    }

    #[test]
    fn headers_and_breadcrumbs() {
        assert_eq!(breadcrumb(View::Interviews), ["Home", "Mock Interviews"]);
        assert_eq!(listing_header(&ListQuery::Topic(Topic::Sql)), "SQL questions");
        assert_eq!(
            listing_header(&ListQuery::Company("meta".into())),
            "Asked at Meta"
        );
        assert_eq!(
            listing_header(&ListQuery::Search("lru".into())),
            "Results for \"lru\""
        );
    }
}
