#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Malformed(String),
    #[error("request head exceeds {0} bytes")]
    TooLarge(usize),
    #[error("connection closed before a request arrived")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
