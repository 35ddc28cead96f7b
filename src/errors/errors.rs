use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input file {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("iteration count must be greater than zero")]
    ZeroIterations,
    #[error("failed to write report: {0}")]
    WriteReport(#[from] io::Error),
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::ReadInput { .. } => "ReadInput",
            Error::ZeroIterations => "ZeroIterations",
            Error::WriteReport(_) => "WriteReport",
        }
    }
}
