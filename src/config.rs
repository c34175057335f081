/// Application-level constants
pub const APP_NAME: &str = "HealthConnect";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,healthconnect=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_healthconnect() {
        assert_eq!(APP_NAME, "HealthConnect");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_parses() {
        let filter: tracing_subscriber::EnvFilter = default_log_filter().parse().unwrap();
        assert!(filter.to_string().contains("healthconnect"));
    }
}
