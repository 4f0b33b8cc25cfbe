use super::*;
use crate::achievements::Achievement;
use crate::model::Question;
use crate::view_models::{ListingView, QuestionDetail, listing_header};

impl InterviewApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.nav
            .current_question()
            .and_then(|id| self.catalog.get(id))
    }

    /// Tarjetas de la vista de práctica (o el aviso de lista vacía)
    pub fn listing(&self) -> ListingView {
        let questions: Vec<&Question> = self
            .visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect();
        ListingView::build(&questions, self.config.preview_chars, |id| {
            self.saved.contains(&id)
        })
    }

    pub fn listing_title(&self) -> String {
        listing_header(self.nav.listing())
    }

    pub fn detail_view(&self) -> Option<QuestionDetail> {
        self.current_question().map(QuestionDetail::new)
    }

    pub fn is_saved(&self, id: QuestionId) -> bool {
        self.saved.contains(&id)
    }

    /// Logros con su estado y el porcentaje completado
    pub fn achievement_rows(&self) -> Vec<(&Achievement, bool, f32)> {
        let progress = self.progress();
        self.achievements
            .all()
            .iter()
            .map(|a| (a, a.is_unlocked(&progress), a.completion(&progress)))
            .collect()
    }

    pub fn unlocked_achievements(&self) -> usize {
        self.achievements.unlocked_count(&self.progress())
    }
}
