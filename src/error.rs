use crate::model::QuestionId;
use std::path::PathBuf;
use thiserror::Error;

/// Fallos de navegación: el estado no se toca cuando se devuelve uno de estos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown view `{0}`")]
    UnknownView(String),
    #[error("no question with id {0}")]
    QuestionNotFound(QuestionId),
    #[error("the question view needs a selected question")]
    NoQuestionSelected,
    #[error("unknown {axis} filter value `{value}`")]
    UnknownFilter { axis: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not parse {what}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Nav(#[from] NavError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(NavError::QuestionNotFound(999).to_string(), "no question with id 999");
        let e = NavError::UnknownFilter {
            axis: "difficulty",
            value: "extreme".into(),
        };
        assert_eq!(e.to_string(), "unknown difficulty filter value `extreme`");
    }

    #[test]
    fn navigation_errors_lift_into_the_crate_error() {
        let e: Error = NavError::NoQuestionSelected.into();
        assert!(matches!(e, Error::Nav(NavError::NoQuestionSelected)));
        assert_eq!(e.to_string(), "the question view needs a selected question");
    }
}
