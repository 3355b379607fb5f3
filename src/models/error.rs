use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The call shape or input text does not satisfy the interface contract
    /// (wrong argument arity, unparseable id field, etc.).
    InvalidArgument(String),
    /// Two elements on the generic counting path could not be placed in a
    /// total order.
    ComparisonError(String),
    /// Pulling the next element from a source failed for a reason other
    /// than ordinary end-of-sequence.
    ResourceExhaustion(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::ComparisonError(msg) => write!(f, "Comparison Error: {}", msg),
            Error::ResourceExhaustion(msg) => write!(f, "Resource Exhaustion: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::InvalidArgument(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::InvalidArgument(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::ResourceExhaustion(err.to_string())
    }
}
