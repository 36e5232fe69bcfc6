/// Transport-level failures talking to the game server.
///
/// Every variant is shown to the player as the same generic network message;
/// the detail only goes to the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {message}")]
    Decode { message: String },
    #[error("could not build HTTP client: {message}")]
    Client { message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode {
                message: err.to_string(),
            }
        } else {
            ApiError::Network {
                message: err.to_string(),
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
