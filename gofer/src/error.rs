use thiserror::Error;

/// App errors
#[derive(Error, Debug)]
pub enum AppError {

    /// Missing arguments
    #[error("Missing mandatory arguments: {0}\nTry `gofer --help` for more information.")]
    MissingArgError(&'static str),

    /// Library error
    #[error("{0}")]
    LibError(#[from] gofer_lib::Error),

    /// Tool I/O error
    #[error("Tool I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tool produced an empty result mapping
    #[error("Empty function response for {0}")]
    EmptyToolResponse(String),

    /// An iteration of the conversation loop failed
    #[error("iteration {n} failed: {source}")]
    Iteration {
        /// 1-based iteration number.
        n: usize,
        /// Underlying failure.
        #[source]
        source: Box<AppError>,
    },

    /// Application logic error.
    #[error("Application error: {0}")]
    ApplicationError(&'static str),
}
