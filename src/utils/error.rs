use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssError {
    #[error("Request to {url} failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Status Code {status} from {url}. Response: {body}")]
    UpstreamError {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Could not parse response from {url}: {reason}")]
    ParseError { url: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    System,
}

impl IssError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IssError::TransportError { .. } => ErrorCategory::Network,
            IssError::UpstreamError { .. } => ErrorCategory::Upstream,
            IssError::ParseError { .. } => ErrorCategory::Data,
            IssError::ConfigError { .. } | IssError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            IssError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and that the service host resolves",
            ErrorCategory::Upstream => "The upstream service rejected the request; try again later",
            ErrorCategory::Data => "The upstream service returned an unexpected payload; check the endpoint configuration",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check that the configuration file exists and is readable",
        }
    }

    /// Process exit status for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => 2,
            ErrorCategory::Data => 1,
            ErrorCategory::Configuration => 64,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, IssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_message_carries_status_and_body() {
        let err = IssError::UpstreamError {
            url: "https://freegeoip.app/json/1.2.3.4".to_string(),
            status: 503,
            body: "Service Unavailable".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Status Code 503 from https://freegeoip.app/json/1.2.3.4. Response: Service Unavailable"
        );
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_share_category() {
        let unparsable = IssError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        let invalid = IssError::InvalidConfigValueError {
            field: "geo_endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };

        assert_eq!(unparsable.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(unparsable.exit_code(), invalid.exit_code());
    }
}
