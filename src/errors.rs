use thiserror::Error;


/// Errors raised by the graph store and the shortest-path engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Weight text did not parse as a non-negative integer
    #[error("invalid weight {input:?}: {reason}")]
    InvalidWeight { input: String, reason: String },

    /// Query references a node that was never inserted
    #[error("start node {0:?} does not exist in the graph")]
    UnknownStartNode(String),

    /// Node referenced during traversal but absent from the store
    #[error("internal error: node {0:?} is missing from the graph")]
    UnknownNode(String),
}

impl GraphError {

    pub fn invalid_weight(input: impl Into<String>, reason: impl ToString) -> Self {
        GraphError::InvalidWeight {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// True for bad user input the session can recover from.
    /// `UnknownNode` is an internal-consistency fault and is never recoverable.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, GraphError::UnknownNode(_))
    }
}


/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}


/// Errors that end the interactive loop
#[derive(Error, Debug)]
pub enum ReplError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),
}


pub type Result<T> = std::result::Result<T, GraphError>;
