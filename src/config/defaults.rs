use super::{Config, Source};

pub const SCHEME_1_URL: &str = "https://api.jsonbin.io/v3/b/6615a7cdacd3cb34a835fbed/latest";
pub const SCHEME_2_URL: &str = "https://api.jsonbin.io/v3/b/6614765be41b4d34e4e15ad4/latest";
pub const STARTUP_DELAY_MS: u64 = 2000;
pub const USER_AGENT: &str = concat!("tint/", env!("CARGO_PKG_VERSION"));

pub fn sources() -> Vec<Source> {
    vec![
        Source {
            label: "Color Scheme 1".to_string(),
            url: SCHEME_1_URL.to_string(),
        },
        Source {
            label: "Color Scheme 2".to_string(),
            url: SCHEME_2_URL.to_string(),
        },
    ]
}

/// Config written on first run.
pub fn defaults() -> Config {
    Config::default()
}
