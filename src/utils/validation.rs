use crate::utils::error::{IssError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> IssError {
    IssError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// A service base must be an absolute http(s) URL with a host.
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field_name, endpoint, format!("not an absolute URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            endpoint,
            format!("scheme must be http or https, not {}", url.scheme()),
        ));
    }
    if url.host().is_none() {
        return Err(invalid(field_name, endpoint, "endpoint has no host"));
    }
    Ok(())
}

/// `limit` is 90 for latitude and 180 for longitude.
pub fn validate_coordinate(field_name: &str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(field_name, value, "not a finite number"));
    }
    if value.abs() > limit {
        return Err(invalid(
            field_name,
            value,
            format!("must be within ±{}", limit),
        ));
    }
    Ok(())
}
