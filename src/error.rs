use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load site configuration: {0}")]
    Config(String),
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
