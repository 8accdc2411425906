use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// The first call wins; later calls return the already installed instance.
pub fn init_config(config: StaticConfig) -> Arc<StaticConfig> {
    CONFIG.get_or_init(|| Arc::new(config)).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_init_wins() {
        let first = init_config(StaticConfig::default());

        let mut other = StaticConfig::default();
        other.api.base_url = "http://other:1".to_string();
        let second = init_config(other);

        assert!(Arc::ptr_eq(&first, &second));
        assert_ne!(second.api.base_url, "http://other:1");
    }
}
