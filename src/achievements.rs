// src/achievements.rs

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Condición de desbloqueo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at_least", rename_all = "snake_case")]
pub enum Rule {
    Streak(u32),
    Solved(u32),
    Submissions(u32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rule: Rule,
}

/// Lo que las reglas miran del progreso de la sesión
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    pub streak: u32,
    pub solved: u32,
    pub submissions: u32,
}

impl Achievement {
    pub fn is_unlocked(&self, progress: &Progress) -> bool {
        match self.rule {
            Rule::Streak(n) => progress.streak >= n,
            Rule::Solved(n) => progress.solved >= n,
            Rule::Submissions(n) => progress.submissions >= n,
        }
    }

    /// Fracción completada, para la barra de la vista de logros
    pub fn completion(&self, progress: &Progress) -> f32 {
        let (have, need) = match self.rule {
            Rule::Streak(n) => (progress.streak, n),
            Rule::Solved(n) => (progress.solved, n),
            Rule::Submissions(n) => (progress.submissions, n),
        };
        if need == 0 {
            1.0
        } else {
            (have as f32 / need as f32).min(1.0)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unlock {
    pub name: String,
    pub description: String,
}

/// Libro de logros: cada logro se anuncia una sola vez y los anuncios esperan en cola
#[derive(Clone, Debug, Default)]
pub struct AchievementBook {
    achievements: Vec<Achievement>,
    announced: HashSet<String>,
    modal: VecDeque<Unlock>,
}

impl AchievementBook {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements,
            announced: HashSet::new(),
            modal: VecDeque::new(),
        }
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Revisa las reglas y encola los logros recién desbloqueados. Devuelve cuántos hay nuevos.
    pub fn check(&mut self, progress: &Progress) -> usize {
        let mut fresh = 0;
        for a in &self.achievements {
            if a.is_unlocked(progress) && self.announced.insert(a.id.clone()) {
                log::info!("achievement unlocked: {}", a.id);
                self.modal.push_back(Unlock {
                    name: a.name.clone(),
                    description: a.description.clone(),
                });
                fresh += 1;
            }
        }
        fresh
    }

    pub fn unlocked_count(&self, progress: &Progress) -> usize {
        self.achievements
            .iter()
            .filter(|a| a.is_unlocked(progress))
            .count()
    }

    /// Logro que muestra el modal ahora mismo
    pub fn showing(&self) -> Option<&Unlock> {
        self.modal.front()
    }

    /// Cierra el modal actual; si había más en cola aparece el siguiente
    pub fn dismiss(&mut self) {
        self.modal.pop_front();
    }

    pub fn dismiss_all(&mut self) {
        self.modal.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> AchievementBook {
        let yaml = r#"
- id: first_question
  name: First Step
  description: Solved your first question
  rule: { kind: solved, at_least: 1 }
- id: seven_day
  name: Week Warrior
  description: 7-day streak
  rule: { kind: streak, at_least: 7 }
- id: thirty_day
  name: Monthly Master
  description: 30-day streak
  rule: { kind: streak, at_least: 30 }
- id: first_submission
  name: First Submission
  description: You submitted your first solution!
  rule: { kind: submissions, at_least: 1 }
"#;
        AchievementBook::new(serde_yaml::from_str(yaml).expect("achievements parse"))
    }

    #[test]
    fn startup_check_shows_first_unlocked_and_queues_the_rest() {
        let mut book = book();
        let progress = Progress {
            streak: 21,
            solved: 156,
            submissions: 0,
        };
        assert_eq!(book.check(&progress), 2);
        assert_eq!(book.showing().map(|u| u.name.as_str()), Some("First Step"));
        book.dismiss();
        assert_eq!(book.showing().map(|u| u.name.as_str()), Some("Week Warrior"));
        book.dismiss();
        assert!(book.showing().is_none());
        assert_eq!(book.unlocked_count(&progress), 2);
    }

    #[test]
    fn achievements_are_announced_once() {
        let mut book = book();
        let mut progress = Progress::default();
        assert_eq!(book.check(&progress), 0);
        progress.submissions = 1;
        assert_eq!(book.check(&progress), 1);
        assert_eq!(
            book.showing().map(|u| u.description.as_str()),
            Some("You submitted your first solution!")
        );
        book.dismiss_all();
        progress.submissions = 2;
        assert_eq!(book.check(&progress), 0);
        assert!(book.showing().is_none());
    }

    #[test]
    fn completion_is_capped() {
        let book = book();
        let progress = Progress {
            streak: 21,
            ..Progress::default()
        };
        let monthly = &book.all()[2];
        assert!((monthly.completion(&progress) - 0.7).abs() < 1e-6);
        assert_eq!(book.all()[1].completion(&progress), 1.0);
    }
}
