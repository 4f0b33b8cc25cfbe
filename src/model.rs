use crate::error::NavError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type QuestionId = u32;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Python,
    Javascript,
    Java,
    Sql,
    Algorithms,
    SystemDesign,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Python,
        Topic::Javascript,
        Topic::Java,
        Topic::Sql,
        Topic::Algorithms,
        Topic::SystemDesign,
    ];

    /// Slug tal y como aparece en el catálogo (y el que usa la búsqueda)
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Python => "python",
            Topic::Javascript => "javascript",
            Topic::Java => "java",
            Topic::Sql => "sql",
            Topic::Algorithms => "algorithms",
            Topic::SystemDesign => "system-design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Python => "Python",
            Topic::Javascript => "JavaScript",
            Topic::Java => "Java",
            Topic::Sql => "SQL",
            Topic::Algorithms => "Algorithms",
            Topic::SystemDesign => "System Design",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavError::UnknownFilter {
                axis: "topic",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Puntos que otorga una entrega correcta
    pub fn points(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 35,
            Difficulty::Advanced => 50,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavError::UnknownFilter {
                axis: "difficulty",
                value: s.to_string(),
            })
    }
}

/// Estado de progreso de una pregunta. Reservado: el filtro lo acepta pero no lo aplica.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    NotStarted,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::InProgress, Status::NotStarted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
            Status::NotStarted => "not-started",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavError::UnknownFilter {
                axis: "status",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Practice,
    Interviews,
    Question,
    Achievements,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Practice,
        View::Interviews,
        View::Question,
        View::Achievements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Practice => "practice",
            View::Interviews => "interviews",
            View::Question => "question",
            View::Achievements => "achievements",
        }
    }

    /// Título para el breadcrumb y la barra lateral
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Practice => "Practice",
            View::Interviews => "Mock Interviews",
            View::Question => "Question",
            View::Achievements => "Achievements",
        }
    }
}

impl FromStr for View {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| NavError::UnknownView(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[serde(rename_all = "lowercase")]
pub enum SolutionLang {
    #[default]
    Python,
    Javascript,
    Java,
}

impl SolutionLang {
    pub const ALL: [SolutionLang; 3] = [
        SolutionLang::Python,
        SolutionLang::Javascript,
        SolutionLang::Java,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SolutionLang::Python => "Python",
            SolutionLang::Javascript => "JavaScript",
            SolutionLang::Java => "Java",
        }
    }

    pub fn comment_prefix(&self) -> &'static str {
        match self {
            SolutionLang::Python => "#",
            SolutionLang::Javascript | SolutionLang::Java => "//",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub description: String,
    pub solution: String, // Solución de referencia
    pub companies: Vec<String>,
    pub attempts: u32,
    pub success_rate: u8,
    pub avg_time: f32, // minutos
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub starter: Option<String>,
    #[serde(default)]
    pub solutions: BTreeMap<SolutionLang, String>,
}

impl Question {
    pub fn has_company(&self, company: &str) -> bool {
        let company = company.trim();
        self.companies.iter().any(|c| c.eq_ignore_ascii_case(company))
    }

    /// Solución en el lenguaje pedido; si no existe, Python y por último la de referencia
    pub fn solution_for(&self, lang: SolutionLang) -> &str {
        self.solutions
            .get(&lang)
            .or_else(|| self.solutions.get(&SolutionLang::Python))
            .map(String::as_str)
            .unwrap_or(&self.solution)
    }

    /// Texto inicial del editor para esta pregunta
    pub fn starter_code(&self, lang: SolutionLang) -> String {
        match &self.starter {
            Some(code) => code.clone(),
            None => format!(
                "{c} {}\n{c} Write your solution here\n\n",
                self.title,
                c = lang.comment_prefix()
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub streak: u32,
    pub points: u32,
}

impl UserProfile {
    pub const POINTS_PER_LEVEL: u32 = 200;

    pub fn level(&self) -> u32 {
        (self.points / Self::POINTS_PER_LEVEL).max(1)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

/// Números del panel principal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub questions_solved: u32,
    pub accuracy_pct: u8,
    pub hours_practiced: u32,
    #[serde(default)]
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_parses_slugs_case_insensitively() {
        assert_eq!("system-design".parse::<Topic>(), Ok(Topic::SystemDesign));
        assert_eq!("Python".parse::<Topic>(), Ok(Topic::Python));
        assert!(matches!(
            "cobol".parse::<Topic>(),
            Err(NavError::UnknownFilter { axis: "topic", .. })
        ));
    }

    #[test]
    fn view_rejects_unknown_names() {
        assert_eq!("practice".parse::<View>(), Ok(View::Practice));
        assert_eq!(
            "settings".parse::<View>(),
            Err(NavError::UnknownView("settings".into()))
        );
    }

    #[test]
    fn level_is_derived_from_points_and_never_zero() {
        let mut user = UserProfile {
            name: "Alex Chen".into(),
            email: "alex@example.com".into(),
            streak: 21,
            points: 2450,
        };
        assert_eq!(user.level(), 12);
        assert_eq!(user.first_name(), "Alex");
        assert_eq!(user.initials(), "AC");
        user.points = 0;
        assert_eq!(user.level(), 1);
    }
}
