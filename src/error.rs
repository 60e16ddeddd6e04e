/// Failures while bringing the server up or while it runs.
#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error("Failed to bind {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the bound address")]
    LocalAddr(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[from] hyper::Error),
}

pub type ServeResult<T> = Result<T, ServeError>;
