use std::env;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "SKYLINES_BACKEND_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolves the backend base URL from the environment, falling back to the
/// localhost default. The returned URL never carries a trailing slash.
pub fn base_url() -> String {
    env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_default_override_and_trailing_slash() {
        env::remove_var(BASE_URL_ENV);
        assert_eq!(base_url(), "http://localhost:8000");

        env::set_var(BASE_URL_ENV, "http://10.0.0.7:9000/");
        assert_eq!(base_url(), "http://10.0.0.7:9000");

        env::set_var(BASE_URL_ENV, "  ");
        assert_eq!(base_url(), "http://localhost:8000");

        env::remove_var(BASE_URL_ENV);
    }
}
