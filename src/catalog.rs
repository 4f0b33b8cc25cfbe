// src/catalog.rs
//
// Banco de preguntas en memoria y sus filtros. Todo es de solo lectura:
// ningún filtro modifica el catálogo y todos conservan el orden de inserción.

use crate::error::{Error, NavError};
use crate::model::{Difficulty, Question, QuestionId, Status, Topic};
use std::collections::HashSet;
use std::str::FromStr;

/// Valor de un eje de filtro: `"all"` significa sin restricción
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Copy> Selection<T> {
    pub fn as_option(&self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(*v),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl<T: FromStr<Err = NavError>> FromStr for Selection<T> {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Criterios combinados del formulario de filtros de la vista de práctica
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub topic: Selection<Topic>,
    pub difficulty: Selection<Difficulty>,
    /// Aceptado pero sin efecto todavía (no hay progreso por pregunta que filtrar)
    pub status: Selection<Status>,
}

impl FilterCriteria {
    /// Construye los criterios a partir de los valores crudos de los selectores
    pub fn parse(topic: &str, difficulty: &str, status: &str) -> Result<Self, NavError> {
        Ok(Self {
            topic: topic.parse()?,
            difficulty: difficulty.parse()?,
            status: status.parse()?,
        })
    }
}

/// Consulta que produce la lista visible en la vista de práctica
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ListQuery {
    #[default]
    All,
    Topic(Topic),
    Company(String),
    Search(String),
    Filters(FilterCriteria),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, Error> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let questions: Vec<Question> = serde_yaml::from_str(text).map_err(|source| Error::Parse {
            what: "question catalog",
            source,
        })?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn by_topic(&self, topic: Topic) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.topic == topic).collect()
    }

    pub fn by_company(&self, company: &str) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.has_company(company)).collect()
    }

    /// Búsqueda sin distinguir mayúsculas en título, descripción y tema.
    /// Una consulta vacía devuelve el catálogo entero.
    pub fn search(&self, query: &str) -> Vec<&Question> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.questions.iter().collect();
        }
        self.questions
            .iter()
            .filter(|q| {
                q.title.to_lowercase().contains(&needle)
                    || q.description.to_lowercase().contains(&needle)
                    || q.topic.as_str().contains(&needle)
            })
            .collect()
    }

    pub fn apply_filters(&self, criteria: &FilterCriteria) -> Vec<&Question> {
        if criteria.status != Selection::All {
            log::debug!("status filter {:?} ignored", criteria.status);
        }
        self.questions
            .iter()
            .filter(|q| criteria.topic.admits(&q.topic))
            .filter(|q| criteria.difficulty.admits(&q.difficulty))
            .collect()
    }

    pub fn query(&self, query: &ListQuery) -> Vec<&Question> {
        match query {
            ListQuery::All => self.questions.iter().collect(),
            ListQuery::Topic(topic) => self.by_topic(*topic),
            ListQuery::Company(company) => self.by_company(company),
            ListQuery::Search(text) => self.search(text),
            ListQuery::Filters(criteria) => self.apply_filters(criteria),
        }
    }

    /// Empresas en orden de primera aparición
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .flat_map(|q| q.companies.iter())
            .filter(|c| seen.insert(c.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn topic_counts(&self) -> Vec<(Topic, usize)> {
        Topic::ALL
            .into_iter()
            .map(|t| (t, self.questions.iter().filter(|q| q.topic == t).count()))
            .collect()
    }
}

fn validate(questions: &[Question]) -> Result<(), Error> {
    let mut ids = HashSet::new();
    for q in questions {
        if !ids.insert(q.id) {
            return Err(Error::InvalidCatalog(format!("duplicate question id {}", q.id)));
        }
        if q.companies.is_empty() {
            return Err(Error::InvalidCatalog(format!("question {} has no companies", q.id)));
        }
        let mut tags = HashSet::new();
        if let Some(dup) = q.companies.iter().find(|c| !tags.insert(c.to_lowercase())) {
            return Err(Error::InvalidCatalog(format!(
                "question {} lists company `{dup}` twice",
                q.id
            )));
        }
        if q.success_rate > 100 {
            return Err(Error::InvalidCatalog(format!(
                "question {} has success rate {}%",
                q.id, q.success_rate
            )));
        }
        if !(q.avg_time > 0.0) {
            return Err(Error::InvalidCatalog(format!(
                "question {} has non-positive average time",
                q.id
            )));
        }
    }
    Ok(())
}
