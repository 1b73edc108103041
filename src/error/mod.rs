use std::io::Error as IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MacOS only supported.")]
    Platform,

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: IoError,
    },

    #[error("{0}")]
    Automation(String),

    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, Error>;
