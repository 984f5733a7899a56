use thiserror::Error;

/// Failures raised by the proxy itself.
///
/// A rejection returned by the push gateway is deliberately not a variant
/// here: a completed send is relayed to the caller verbatim whether the
/// gateway accepted it or not.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Client identity material could not be read or parsed. Fatal at
    /// startup; the listener never starts.
    #[error("Invalid client identity: {0}")]
    Credential(String),

    /// The upstream HTTP client could not be constructed. Fatal at startup.
    #[error("Gateway client build failed: {0}")]
    ClientBuild(String),

    /// The send never completed (connection, TLS, or protocol fault).
    #[error("Push transport failure: {0}")]
    Transport(String),

    /// The gateway answered, but its response body could not be decoded.
    /// Handled exactly like a transport failure.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, ProxyError>;
