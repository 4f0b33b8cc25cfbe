use crate::achievements::{AchievementBook, Progress};
use crate::catalog::{Catalog, FilterCriteria};
use crate::chart::MasteryChart;
use crate::config::AppConfig;
use crate::data::{SessionSeed, read_catalog_embedded, read_session_embedded};
use crate::error::Error;
use crate::model::{DashboardStats, QuestionId, SolutionLang, UserProfile, View};
use crate::navigation::NavState;
use crate::notifications::{Inbox, NotificationKind, Toasts};
use crate::particles::{ParticleConfig, ParticleField};
use crate::runner::{CodeRunner, OutcomeSource, RandomOutcomes};
use crate::schedule::{Debounced, Timers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerKey {
    Loading,
    CodeRun,
    AchievementCheck,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum QuestionTab {
    #[default]
    Description,
    Hints,
    Solution,
}

/// Paneles, menús y modales abiertos
#[derive(Clone, Debug)]
pub struct Panels {
    pub loading: bool,
    pub sidebar_open: bool,
    pub user_menu_open: bool,
    pub code_modal_open: bool,
    pub dark_mode: bool,
    pub focus_search: bool,
    pub scroll_to_top: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            loading: true,
            sidebar_open: true,
            user_menu_open: false,
            code_modal_open: false,
            dark_mode: true,
            focus_search: false,
            scroll_to_top: false,
        }
    }
}

/// Estado de la vista de detalle (pestaña, pistas reveladas, lenguaje de la solución)
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub tab: QuestionTab,
    pub revealed_hints: usize,
    pub solution_lang: SolutionLang,
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub text: String,
    pub lang: SolutionLang,
    pub question: Option<QuestionId>,
}

pub struct InterviewApp {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub nav: NavState,
    pub profile: UserProfile,
    pub stats: DashboardStats,
    pub achievements: AchievementBook,
    pub toasts: Toasts,
    pub inbox: Inbox,
    pub chart: MasteryChart,
    pub runner: CodeRunner,
    pub particles: ParticleField,
    pub timers: Timers<TimerKey>,
    pub pending_search: Debounced<String>,
    pub search_input: String,
    pub filters: FilterCriteria,
    pub panels: Panels,
    pub detail: DetailState,
    pub editor: EditorState,
    /// Ids de la lista de práctica visible, recalculados en cada refresco
    pub visible: Vec<QuestionId>,
    pub saved: BTreeSet<QuestionId>,
    pub solved: BTreeSet<QuestionId>,
    pub submissions: u32,
    /// Último instante de reloj visto (segundos)
    pub now: f64,
}

impl InterviewApp {
    /// Arranque normal: configuración del entorno, datos embebidos y azar real
    pub fn new() -> Result<Self, Error> {
        let config = AppConfig::load()?;
        let catalog = read_catalog_embedded()?;
        let seed = read_session_embedded()?;
        let outcomes = RandomOutcomes::new(StdRng::from_entropy(), config.pass_probability);
        log::info!(
            "catalog loaded: {} questions, {} companies",
            catalog.len(),
            catalog.companies().len()
        );
        Ok(Self::from_parts(config, catalog, seed, Box::new(outcomes)))
    }

    pub fn from_parts(
        config: AppConfig,
        catalog: Catalog,
        seed: SessionSeed,
        outcomes: Box<dyn OutcomeSource>,
    ) -> Self {
        let visible = catalog.all().iter().map(|q| q.id).collect();
        let particles = ParticleField::new(ParticleConfig {
            count: if config.particles { ParticleConfig::default().count } else { 0 },
            ..ParticleConfig::default()
        });

        let mut app = Self {
            toasts: Toasts::new(config.toasts),
            pending_search: Debounced::new(config.search_debounce_secs),
            config,
            catalog,
            nav: NavState::new(),
            profile: seed.user,
            stats: seed.dashboard,
            achievements: AchievementBook::new(seed.achievements),
            inbox: Inbox::new(seed.inbox),
            chart: MasteryChart::default(),
            runner: CodeRunner::new(outcomes),
            particles,
            timers: Timers::new(),
            search_input: String::new(),
            filters: FilterCriteria::default(),
            panels: Panels::default(),
            detail: DetailState::default(),
            editor: EditorState::default(),
            visible,
            saved: BTreeSet::new(),
            solved: BTreeSet::new(),
            submissions: 0,
            now: 0.0,
        };

        app.stats.streak = app.profile.streak;
        app.timers.schedule(TimerKey::Loading, 0.0, app.config.loading_secs);
        // Los logros se revisan una vez al arrancar
        app.check_achievements();
        app
    }

    pub fn view(&self) -> View {
        self.nav.view()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            streak: self.profile.streak,
            solved: self.stats.questions_solved,
            submissions: self.submissions,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.toasts.push(message, kind, self.now);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::tests::FIXTURE;
    use crate::runner::FixedOutcome;

    pub(crate) fn app_with(passes: bool) -> InterviewApp {
        let catalog = Catalog::from_yaml(FIXTURE).expect("fixture");
        let seed = read_session_embedded().expect("seed");
        InterviewApp::from_parts(
            AppConfig::default(),
            catalog,
            seed,
            Box::new(FixedOutcome(passes)),
        )
    }

    #[test]
    fn starts_loading_on_the_dashboard_with_the_full_list() {
        let app = app_with(true);
        assert!(app.panels.loading);
        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.visible, vec![1, 2, 3]);
        assert_eq!(app.stats.streak, 21);
        assert_eq!(app.profile.level(), 12);
    }

    #[test]
    fn startup_check_announces_the_first_unlocked_achievement() {
        let app = app_with(true);
        assert_eq!(
            app.achievements.showing().map(|u| u.name.as_str()),
            Some("First Step")
        );
    }
}
