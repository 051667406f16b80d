use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("threadmod.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub moderation: Option<Moderation>,
    pub threads: Option<Threads>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

/// The batch limits are split into a page and a tail,
/// i.e. a batch may contain a full page plus some more items.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Moderation {
    pub posts_per_page: usize,
    pub posts_tail: usize,
    pub threads_per_page: usize,
    pub threads_tail: usize,
}

impl Default for Moderation {
    fn default() -> Self {
        Config::default()
            .moderation
            .expect("Moderation configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Threads {
    pub title_min_length: usize,
    pub title_max_length: usize,
}

impl Default for Threads {
    fn default() -> Self {
        Config::default().threads.expect("Threads configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.moderation.is_some());
        assert!(cfg.threads.is_some());
    }

    #[test]
    fn default_moderation_config() {
        let cfg = Moderation::default();
        assert_eq!(24, cfg.posts_per_page + cfg.posts_tail);
        assert_eq!(40, cfg.threads_per_page + cfg.threads_tail);
    }

    #[test]
    fn missing_sections() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.moderation.is_none());
        assert!(cfg.threads.is_none());
    }

    #[test]
    fn reject_incomplete_sections() {
        let res = toml::from_str::<Config>("[moderation]\nposts-per-page = 10\n");
        assert!(res.is_err());
    }
}
