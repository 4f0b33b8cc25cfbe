use super::*;
use crate::error::NavError;
use crate::model::Topic;
use crate::navigation::Refresh;

impl InterviewApp {
    pub fn switch_view(&mut self, view: View) {
        match self.nav.switch_view(view) {
            Ok(refresh) => {
                log::info!("view -> {}", view.as_str());
                if view == View::Practice {
                    self.filters = FilterCriteria::default();
                }
                self.apply_refresh(refresh);
            }
            Err(e) => self.rejected(e),
        }
    }

    /// Entrada por nombre, la que usan los atajos y los enlaces de la barra lateral
    pub fn switch_view_named(&mut self, name: &str) {
        match name.parse::<View>() {
            Ok(view) => self.switch_view(view),
            Err(e) => self.rejected(e),
        }
    }

    pub fn load_topic(&mut self, topic: Topic) {
        let refresh = self.nav.load_topic(topic);
        self.filters = FilterCriteria {
            topic: crate::catalog::Selection::Only(topic),
            ..FilterCriteria::default()
        };
        self.apply_refresh(refresh);
        let n = self.visible.len();
        self.notify(
            format!("Loaded {n} {} questions", topic.label()),
            NotificationKind::Info,
        );
    }

    pub fn load_company_questions(&mut self, company: &str) {
        let refresh = self.nav.load_company_questions(company);
        self.filters = FilterCriteria::default();
        self.apply_refresh(refresh);
    }

    pub fn load_question(&mut self, id: QuestionId) {
        match self.nav.load_question(id, &self.catalog) {
            Ok(refresh) => {
                log::info!("question {id} opened");
                self.apply_refresh(refresh);
            }
            Err(e) => self.rejected(e),
        }
    }

    /// Cada pulsación en la caja de búsqueda; la búsqueda real llega tras el debounce
    pub fn on_search_input(&mut self) {
        let text = self.search_input.clone();
        self.pending_search.push(text, self.now);
    }

    pub fn search(&mut self, query: &str) {
        let refresh = self.nav.search(query);
        self.filters = FilterCriteria::default();
        self.apply_refresh(refresh);
        log::debug!("search {:?}: {} results", query.trim(), self.visible.len());
    }

    /// Aplica los filtros de los desplegables de la vista de práctica
    pub fn apply_filters(&mut self) {
        let refresh = self.nav.apply_filters(self.filters);
        self.apply_refresh(refresh);
        let n = self.visible.len();
        self.notify(format!("Showing {n} questions"), NotificationKind::Info);
    }

    /// Igual que `apply_filters`, con los valores tal cual llegan de un formulario
    pub fn apply_filters_named(&mut self, topic: &str, difficulty: &str, status: &str) {
        match FilterCriteria::parse(topic, difficulty, status) {
            Ok(criteria) => {
                self.filters = criteria;
                self.apply_filters();
            }
            Err(e) => self.rejected(e),
        }
    }

    pub fn back_to_practice(&mut self) {
        let refresh = self.nav.back_to_practice();
        self.apply_refresh(refresh);
    }

    fn rejected(&self, e: NavError) {
        log::warn!("navigation rejected: {e}");
    }

    fn apply_refresh(&mut self, refresh: Refresh) {
        match refresh {
            Refresh::DashboardStats => {
                self.stats.streak = self.profile.streak;
            }
            Refresh::PracticeList => {
                self.visible = self
                    .catalog
                    .query(self.nav.listing())
                    .iter()
                    .map(|q| q.id)
                    .collect();
            }
            Refresh::MockInterviews => {
                self.notify("Mock interviews feature coming soon!", NotificationKind::Info);
            }
            Refresh::QuestionDetail => {
                self.detail = DetailState {
                    solution_lang: self.detail.solution_lang,
                    ..DetailState::default()
                };
            }
            Refresh::Nothing => {}
        }
        self.panels.scroll_to_top = true;
        self.panels.user_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::app_with;
    use super::*;
    use crate::catalog::Selection;
    use crate::model::Difficulty;

    fn messages(app: &InterviewApp) -> Vec<&str> {
        app.toasts.all().iter().map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn topic_listing_and_toast() {
        let mut app = app_with(true);
        app.load_topic(Topic::Python);
        assert_eq!(app.view(), View::Practice);
        assert_eq!(app.visible, vec![1]);
        assert_eq!(app.nav.topic_filter(), Some(Topic::Python));
        assert!(messages(&app).contains(&"Loaded 1 Python questions"));
        assert!(app.panels.scroll_to_top);
    }

    #[test]
    fn company_listing_is_case_insensitive() {
        let mut app = app_with(true);
        app.load_company_questions("Meta");
        assert_eq!(app.visible, vec![1, 3]);
        assert_eq!(app.nav.company_filter(), Some("meta"));
    }

    #[test]
    fn missing_question_leaves_everything_as_it_was() {
        let mut app = app_with(true);
        app.load_topic(Topic::Algorithms);
        let before = app.nav.clone();
        app.load_question(999);
        assert_eq!(app.nav, before);
        assert_eq!(app.visible, vec![2]);
    }

    #[test]
    fn detail_then_back_keeps_the_listing() {
        let mut app = app_with(true);
        app.load_company_questions("amazon");
        app.load_question(2);
        assert_eq!(app.view(), View::Question);
        app.detail.revealed_hints = 2;
        app.back_to_practice();
        assert_eq!(app.view(), View::Practice);
        assert_eq!(app.nav.current_question(), None);
        assert_eq!(app.visible, vec![1, 2]);

        app.load_question(1);
        assert_eq!(app.detail.revealed_hints, 0);
    }

    #[test]
    fn switching_to_practice_shows_everything_again() {
        let mut app = app_with(true);
        app.apply_filters_named("python", "hard", "all");
        assert_eq!(app.visible, vec![1]);
        app.switch_view(View::Practice);
        assert_eq!(app.visible, vec![1, 2, 3]);
        assert_eq!(app.filters, FilterCriteria::default());
    }

    #[test]
    fn question_view_needs_a_selection() {
        let mut app = app_with(true);
        app.switch_view(View::Question);
        assert_eq!(app.view(), View::Dashboard);
        app.switch_view_named("nowhere");
        assert_eq!(app.view(), View::Dashboard);
        app.switch_view_named("achievements");
        assert_eq!(app.view(), View::Achievements);
    }

    #[test]
    fn filters_report_how_many_questions_match() {
        let mut app = app_with(true);
        app.filters.difficulty = Selection::Only(Difficulty::Hard);
        app.apply_filters();
        assert_eq!(app.visible, vec![1, 2]);
        assert!(messages(&app).contains(&"Showing 2 questions"));

        app.apply_filters_named("cobol", "all", "all");
        assert_eq!(app.visible, vec![1, 2]);
    }

    #[test]
    fn search_runs_after_the_debounce_with_the_last_text() {
        let mut app = app_with(true);
        app.tick(2.0);
        app.search_input = "mer".into();
        app.on_search_input();
        app.tick(2.25);
        app.search_input = "merge".into();
        app.on_search_input();
        app.tick(2.5);
        assert_eq!(app.view(), View::Dashboard);
        app.tick(2.75);
        assert_eq!(app.view(), View::Practice);
        assert_eq!(app.visible, vec![2]);
    }

    #[test]
    fn nothing_matches_an_unknown_term() {
        let mut app = app_with(true);
        app.search("  kubernetes  ");
        assert!(app.visible.is_empty());
        assert!(app.listing().is_empty());
    }

    #[test]
    fn interviews_placeholder_toast() {
        let mut app = app_with(true);
        app.switch_view(View::Interviews);
        assert!(messages(&app).contains(&"Mock interviews feature coming soon!"));
    }
}
