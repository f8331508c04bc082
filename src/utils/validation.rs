use crate::utils::error::{BootError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BootError::ConfigError {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BootError::ConfigError {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BootError::ConfigError {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BootError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BootError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("base_url", "http://localhost:8080/").is_ok());
        assert!(validate_url("base_url", "https://example.com").is_ok());
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
    }

    #[test]
    fn rejects_bad_paths() {
        assert!(validate_path("template_path", "").is_err());
        assert!(validate_path("template_path", "bad\0path").is_err());
        assert!(validate_path("template_path", "./page/template.html").is_ok());
    }
}
