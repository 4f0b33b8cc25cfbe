use super::*;
use crate::keymap::Shortcut;
use crate::runner::RunRequest;

/// Texto que se copia al portapapeles al compartir
pub const SHARE_TEXT: &str = "Check out my progress on InterviewMaster!";

/// Cuánto sube el eje del radar por cada pregunta resuelta
const MASTERY_STEP: f32 = 2.0;

impl InterviewApp {
    /// Avanza el reloj: dispara temporizadores, la búsqueda pendiente y limpia avisos
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        for key in self.timers.fire_due(now) {
            log::debug!("timer {key:?} fired at t={now:.3}");
            match key {
                TimerKey::Loading => self.finish_loading(),
                TimerKey::CodeRun => self.finish_run(),
                TimerKey::AchievementCheck => self.check_achievements(),
            }
        }
        if let Some(query) = self.pending_search.poll(now) {
            self.search(&query);
        }
        self.toasts.prune(now);
    }

    /// Próximo instante en el que algo cambia sin que el usuario haga nada
    pub fn next_wakeup(&self) -> Option<f64> {
        [
            self.timers.next_deadline(),
            self.pending_search.deadline(),
            self.toasts.next_change(self.now),
        ]
        .into_iter()
        .flatten()
        .min_by(f64::total_cmp)
    }

    fn finish_loading(&mut self) {
        self.panels.loading = false;
        let msg = format!(
            "Welcome back, {}! Ready to continue your streak?",
            self.profile.first_name()
        );
        self.notify(msg, NotificationKind::Success);
    }

    pub fn check_achievements(&mut self) {
        let progress = self.progress();
        let fresh = self.achievements.check(&progress);
        if fresh > 0 {
            log::debug!("{fresh} achievement(s) queued");
        }
    }

    // ---------- Editor y ejecución simulada ----------

    /// Abre el modal del editor con el código inicial de la pregunta actual
    pub fn start_coding(&mut self) {
        let current = self.nav.current_question();
        if self.editor.question != current || self.editor.text.is_empty() {
            self.editor.question = current;
            self.editor.text = self.starter_text(self.editor.lang);
        }
        self.panels.code_modal_open = true;
    }

    /// Cambia el lenguaje del editor; si el texto no se ha tocado se sustituye por el nuevo esqueleto
    pub fn set_editor_lang(&mut self, lang: SolutionLang) {
        if lang == self.editor.lang {
            return;
        }
        let untouched = self.editor.text == self.starter_text(self.editor.lang);
        self.editor.lang = lang;
        if untouched {
            self.editor.text = self.starter_text(lang);
        }
    }

    fn starter_text(&self, lang: SolutionLang) -> String {
        match self.editor.question.and_then(|id| self.catalog.get(id)) {
            Some(q) => q.starter_code(lang),
            None => format!("{} Write your code here\n", lang.comment_prefix()),
        }
    }

    pub fn run_code(&mut self) {
        self.start_run(false);
    }

    /// Como `run_code`, pero cuenta como envío y revisa logros poco después
    pub fn submit_code(&mut self) {
        self.start_run(true);
        self.submissions += 1;
        self.timers.schedule(
            TimerKey::AchievementCheck,
            self.now,
            self.config.achievement_delay_secs,
        );
    }

    fn start_run(&mut self, submission: bool) {
        let request = RunRequest {
            question: self.editor.question.or(self.nav.current_question()),
            submission,
        };
        self.runner.start(request);
        self.timers
            .schedule(TimerKey::CodeRun, self.now, self.config.run_delay_secs);
    }

    fn finish_run(&mut self) {
        let Some((request, outcome)) = self.runner.finish() else {
            return;
        };
        log::info!(
            "run finished (submission: {}, passed: {})",
            request.submission,
            outcome.is_pass()
        );
        if !(request.submission && outcome.is_pass()) {
            return;
        }
        let Some(q) = request.question.and_then(|id| self.catalog.get(id)) else {
            return;
        };
        // Solo la primera resolución de cada pregunta da puntos
        if !self.solved.insert(q.id) {
            return;
        }
        let points = q.difficulty.points();
        let axis = q.topic.label();
        self.profile.points += points;
        self.stats.questions_solved += 1;
        self.chart.bump(axis, MASTERY_STEP);
        self.notify(format!("+{points} points"), NotificationKind::Success);
    }

    pub fn clear_results(&mut self) {
        self.runner.clear();
    }

    // ---------- Detalle de pregunta ----------

    pub fn save_question(&mut self) {
        if let Some(id) = self.nav.current_question() {
            self.toggle_saved(id);
        }
    }

    /// Guarda o quita una pregunta de la lista; solo en memoria
    pub fn toggle_saved(&mut self, id: QuestionId) {
        if self.saved.insert(id) {
            self.notify("Question saved to your list!", NotificationKind::Success);
        } else {
            self.saved.remove(&id);
            self.notify("Question removed from your list", NotificationKind::Info);
        }
    }

    pub fn show_next_hint(&mut self) {
        let total = self.current_question().map_or(0, |q| q.hints.len());
        if self.detail.revealed_hints < total {
            self.detail.revealed_hints += 1;
        }
        self.detail.tab = QuestionTab::Hints;
    }

    // ---------- Menús y utilidades ----------

    /// Devuelve el texto a copiar; la UI lo pone en el portapapeles
    pub fn share_progress(&mut self) -> &'static str {
        self.notify("Link copied to clipboard!", NotificationKind::Success);
        SHARE_TEXT
    }

    pub fn export_data(&mut self) {
        self.panels.user_menu_open = false;
        self.notify("Exporting data...", NotificationKind::Info);
    }

    pub fn toggle_theme(&mut self) {
        self.panels.dark_mode = !self.panels.dark_mode;
    }

    pub fn toggle_notifications(&mut self) {
        self.inbox.toggle();
        self.panels.user_menu_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.panels.user_menu_open = !self.panels.user_menu_open;
        self.inbox.open = false;
    }

    pub fn close_all_modals(&mut self) {
        self.panels.code_modal_open = false;
        self.panels.user_menu_open = false;
        self.inbox.open = false;
        self.achievements.dismiss_all();
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        log::debug!("shortcut {shortcut:?}");
        match shortcut {
            Shortcut::FocusSearch => self.panels.focus_search = true,
            Shortcut::CloseModals => self.close_all_modals(),
            Shortcut::Dashboard => self.switch_view(View::Dashboard),
            Shortcut::Practice => self.switch_view(View::Practice),
            Shortcut::Interviews => self.switch_view(View::Interviews),
        }
    }
}
