use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use threadmod_core::usecases::Limits;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "threadmod.toml";

const ENV_NAME_POSTS_LIMIT: &str = "THREADMOD_POSTS_LIMIT";
const ENV_NAME_THREADS_LIMIT: &str = "THREADMOD_THREADS_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub moderation: Moderation,
    pub threads: Threads,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Err(err) = dotenvy::dotenv() {
            log::debug!("No environment file loaded: {err}");
        }
        cfg.override_limits(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn override_limits(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(limit) = parse_limit(ENV_NAME_POSTS_LIMIT, var(ENV_NAME_POSTS_LIMIT))? {
            log::info!("Use posts limit {limit} from {ENV_NAME_POSTS_LIMIT}");
            self.moderation.posts_limit = limit;
        }
        if let Some(limit) = parse_limit(ENV_NAME_THREADS_LIMIT, var(ENV_NAME_THREADS_LIMIT))? {
            log::info!("Use threads limit {limit} from {ENV_NAME_THREADS_LIMIT}");
            self.moderation.threads_limit = limit;
        }
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits::from(self)
    }
}

fn parse_limit(name: &str, value: Option<String>) -> Result<Option<usize>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let limit: usize = value
        .trim()
        .parse()
        .map_err(|err| anyhow!("Invalid value '{value}' of {name}: {err}"))?;
    if limit == 0 {
        return Err(anyhow!("{name} must be greater than zero"));
    }
    Ok(Some(limit))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moderation {
    /// Max. number of posts per action
    pub posts_limit: usize,
    /// Max. number of threads per action
    pub threads_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threads {
    pub title_min_length: usize,
    pub title_max_length: usize,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            moderation,
            threads,
        } = from;

        let raw::Moderation {
            posts_per_page,
            posts_tail,
            threads_per_page,
            threads_tail,
        } = moderation.unwrap_or_default();

        let moderation = Moderation {
            posts_limit: posts_per_page + posts_tail,
            threads_limit: threads_per_page + threads_tail,
        };
        if moderation.posts_limit == 0 || moderation.threads_limit == 0 {
            return Err(anyhow!("Moderation limits must be greater than zero"));
        }

        let raw::Threads {
            title_min_length,
            title_max_length,
        } = threads.unwrap_or_default();

        if title_min_length > title_max_length {
            return Err(anyhow!(
                "Min. thread title length ({title_min_length}) exceeds max. length ({title_max_length})"
            ));
        }
        let threads = Threads {
            title_min_length,
            title_max_length,
        };

        Ok(Self {
            moderation,
            threads,
        })
    }
}

impl From<&Config> for Limits {
    fn from(from: &Config) -> Self {
        Self {
            posts: from.moderation.posts_limit,
            threads: from.moderation.threads_limit,
            thread_title_min_length: from.threads.title_min_length,
            thread_title_max_length: from.threads.title_max_length,
        }
    }
}
