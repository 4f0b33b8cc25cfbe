// src/navigation.rs
//
// Estado de navegación explícito. Cada transición valida antes de mutar, así que
// un `Err` deja el estado exactamente como estaba.

use crate::catalog::{Catalog, FilterCriteria, ListQuery};
use crate::error::NavError;
use crate::model::{QuestionId, Topic, View};

/// Recarga que la vista recién activada necesita
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    DashboardStats,
    PracticeList,
    MockInterviews,
    QuestionDetail,
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NavState {
    view: View,
    topic_filter: Option<Topic>,
    company_filter: Option<String>,
    current_question: Option<QuestionId>,
    listing: ListQuery,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn topic_filter(&self) -> Option<Topic> {
        self.topic_filter
    }

    pub fn company_filter(&self) -> Option<&str> {
        self.company_filter.as_deref()
    }

    pub fn current_question(&self) -> Option<QuestionId> {
        self.current_question
    }

    pub fn listing(&self) -> &ListQuery {
        &self.listing
    }

    /// Cambia de vista por nombre (`"dashboard"`, `"practice"`...)
    pub fn switch_view_named(&mut self, name: &str) -> Result<Refresh, NavError> {
        let view = name.parse::<View>()?;
        self.switch_view(view)
    }

    pub fn switch_view(&mut self, view: View) -> Result<Refresh, NavError> {
        match view {
            View::Question => {
                // Solo se entra al detalle a través de `load_question`
                if self.current_question.is_none() {
                    return Err(NavError::NoQuestionSelected);
                }
                self.view = View::Question;
                Ok(Refresh::QuestionDetail)
            }
            View::Practice => {
                self.enter_practice(ListQuery::All);
                self.topic_filter = None;
                self.company_filter = None;
                Ok(Refresh::PracticeList)
            }
            View::Dashboard => {
                self.leave_question(View::Dashboard);
                Ok(Refresh::DashboardStats)
            }
            View::Interviews => {
                self.leave_question(View::Interviews);
                Ok(Refresh::MockInterviews)
            }
            View::Achievements => {
                self.leave_question(View::Achievements);
                Ok(Refresh::Nothing)
            }
        }
    }

    pub fn load_topic(&mut self, topic: Topic) -> Refresh {
        self.enter_practice(ListQuery::Topic(topic));
        self.topic_filter = Some(topic);
        self.company_filter = None;
        Refresh::PracticeList
    }

    pub fn load_company_questions(&mut self, company: &str) -> Refresh {
        let company = company.trim().to_lowercase();
        self.enter_practice(ListQuery::Company(company.clone()));
        self.company_filter = Some(company);
        self.topic_filter = None;
        Refresh::PracticeList
    }

    pub fn load_question(&mut self, id: QuestionId, catalog: &Catalog) -> Result<Refresh, NavError> {
        if catalog.get(id).is_none() {
            return Err(NavError::QuestionNotFound(id));
        }
        self.current_question = Some(id);
        self.view = View::Question;
        Ok(Refresh::QuestionDetail)
    }

    /// Búsqueda global: muestra los resultados en la vista de práctica
    pub fn search(&mut self, query: &str) -> Refresh {
        let query = query.trim();
        let listing = if query.is_empty() {
            ListQuery::All
        } else {
            ListQuery::Search(query.to_string())
        };
        self.enter_practice(listing);
        self.topic_filter = None;
        self.company_filter = None;
        Refresh::PracticeList
    }

    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> Refresh {
        self.enter_practice(ListQuery::Filters(criteria));
        self.topic_filter = criteria.topic.as_option();
        self.company_filter = None;
        Refresh::PracticeList
    }

    /// Vuelve del detalle a la lista que estaba activa
    pub fn back_to_practice(&mut self) -> Refresh {
        self.leave_question(View::Practice);
        Refresh::PracticeList
    }

    fn enter_practice(&mut self, listing: ListQuery) {
        self.listing = listing;
        self.leave_question(View::Practice);
    }

    fn leave_question(&mut self, view: View) {
        self.current_question = None;
        self.view = view;
    }

    pub fn is_consistent(&self) -> bool {
        self.current_question.is_some() == (self.view == View::Question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;
    use crate::catalog::Selection;
    use crate::model::Difficulty;

    #[test]
    fn starts_on_the_dashboard_with_nothing_selected() {
        let nav = NavState::new();
        assert_eq!(nav.view(), View::Dashboard);
        assert_eq!(nav.topic_filter(), None);
        assert_eq!(nav.company_filter(), None);
        assert_eq!(nav.current_question(), None);
        assert!(nav.is_consistent());
    }

    #[test]
    fn switch_view_returns_the_view_specific_refresh() {
        let mut nav = NavState::new();
        assert_eq!(nav.switch_view(View::Practice), Ok(Refresh::PracticeList));
        assert_eq!(nav.switch_view(View::Interviews), Ok(Refresh::MockInterviews));
        assert_eq!(nav.switch_view(View::Achievements), Ok(Refresh::Nothing));
        assert_eq!(nav.switch_view(View::Dashboard), Ok(Refresh::DashboardStats));
        assert_eq!(nav.view(), View::Dashboard);
    }

    #[test]
    fn unknown_view_names_leave_state_untouched() {
        let mut nav = NavState::new();
        nav.load_topic(Topic::Python);
        let before = nav.clone();
        assert_eq!(
            nav.switch_view_named("settings"),
            Err(NavError::UnknownView("settings".into()))
        );
        assert_eq!(nav, before);
    }

    #[test]
    fn question_view_needs_a_selected_question() {
        let mut nav = NavState::new();
        assert_eq!(nav.switch_view(View::Question), Err(NavError::NoQuestionSelected));
        assert_eq!(nav.view(), View::Dashboard);
    }

    #[test]
    fn load_topic_clears_company_and_opens_practice() {
        let mut nav = NavState::new();
        nav.load_company_questions("Meta");
        assert_eq!(nav.company_filter(), Some("meta"));

        assert_eq!(nav.load_topic(Topic::Algorithms), Refresh::PracticeList);
        assert_eq!(nav.view(), View::Practice);
        assert_eq!(nav.topic_filter(), Some(Topic::Algorithms));
        assert_eq!(nav.company_filter(), None);
        assert_eq!(nav.listing(), &ListQuery::Topic(Topic::Algorithms));
    }

    #[test]
    fn load_company_is_symmetric() {
        let mut nav = NavState::new();
        nav.load_topic(Topic::Python);
        nav.load_company_questions("amazon");
        assert_eq!(nav.view(), View::Practice);
        assert_eq!(nav.topic_filter(), None);
        assert_eq!(nav.listing(), &ListQuery::Company("amazon".into()));
    }

    #[test]
    fn loading_a_missing_question_changes_nothing() {
        let catalog = fixture();
        let mut nav = NavState::new();
        nav.load_topic(Topic::Python);
        let before = nav.clone();
        assert_eq!(
            nav.load_question(999, &catalog),
            Err(NavError::QuestionNotFound(999))
        );
        assert_eq!(nav, before);
    }

    #[test]
    fn back_to_practice_keeps_the_listing() {
        let catalog = fixture();
        let mut nav = NavState::new();
        nav.load_company_questions("meta");
        nav.load_question(3, &catalog).unwrap();
        assert_eq!(nav.view(), View::Question);
        assert_eq!(nav.current_question(), Some(3));

        nav.back_to_practice();
        assert_eq!(nav.view(), View::Practice);
        assert_eq!(nav.current_question(), None);
        assert_eq!(nav.listing(), &ListQuery::Company("meta".into()));
    }

    #[test]
    fn switching_to_practice_resets_the_listing() {
        let mut nav = NavState::new();
        nav.load_topic(Topic::Python);
        nav.switch_view(View::Practice).unwrap();
        assert_eq!(nav.listing(), &ListQuery::All);
        assert_eq!(nav.topic_filter(), None);
    }

    #[test]
    fn search_and_filters_drive_the_listing() {
        let mut nav = NavState::new();
        nav.search("  lru ");
        assert_eq!(nav.listing(), &ListQuery::Search("lru".into()));
        nav.search("   ");
        assert_eq!(nav.listing(), &ListQuery::All);

        let criteria = FilterCriteria {
            topic: Selection::Only(Topic::Python),
            difficulty: Selection::Only(Difficulty::Hard),
            status: Selection::All,
        };
        nav.apply_filters(criteria);
        assert_eq!(nav.topic_filter(), Some(Topic::Python));
        assert_eq!(nav.listing(), &ListQuery::Filters(criteria));
    }

    #[test]
    fn invariant_holds_over_any_sequence() {
        let catalog = fixture();
        let mut nav = NavState::new();
        let names = ["dashboard", "practice", "question", "interviews", "achievements", "bogus"];

        // recorrido determinista que mezcla todas las operaciones
        for step in 0..200usize {
            match step % 6 {
                0 => {
                    let _ = nav.switch_view_named(names[step % names.len()]);
                }
                1 => {
                    nav.load_topic(Topic::ALL[step % Topic::ALL.len()]);
                }
                2 => {
                    nav.load_company_questions(["meta", "amazon", "nobody"][step % 3]);
                }
                3 => {
                    let _ = nav.load_question((step % 5) as QuestionId, &catalog);
                }
                4 => {
                    let _ = nav.switch_view(View::ALL[step % View::ALL.len()]);
                }
                _ => {
                    nav.back_to_practice();
                    let _ = nav.load_question(1 + (step % 3) as QuestionId, &catalog);
                }
            }
            assert!(nav.is_consistent(), "broken after step {step}: {nav:?}");
        }
    }
}
