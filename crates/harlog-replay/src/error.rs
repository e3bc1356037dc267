use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to build request: {0}")]
    Build(#[from] http::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
