use thiserror::Error;

/// Which of the two input tables a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Roster,
    Results,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetKind::Roster => write!(f, "Roster"),
            DatasetKind::Results => write!(f, "Results"),
        }
    }
}

/// Fatal problems with an input table, surfaced before aggregation runs.
///
/// Unknown climber references, unrecognized divisions and malformed numbers
/// are not errors: they are logged and the row or value is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{dataset} data is missing required column '{column}'")]
    MissingColumn { dataset: DatasetKind, column: String },
}

impl LoadError {
    pub fn missing_column(dataset: DatasetKind, column: &str) -> Self {
        LoadError::MissingColumn {
            dataset,
            column: column.to_string(),
        }
    }
}
