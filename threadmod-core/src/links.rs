use crate::entities::ThreadId;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref THREAD_PATH_REGEX: Regex =
        Regex::new(r"^/t/(?P<slug>[\w-]+)/(?P<id>\d+)(/.*)?$").unwrap();
}

/// Extracts the id of a thread from a link entered by a user.
pub trait LinkParser {
    fn thread_id_from_link(&self, link: &str) -> Option<ThreadId>;
}

/// Parses links to threads of a forum hosted at `base_url`.
///
/// Accepts absolute links to the same host as well as links
/// relative to the forum, e.g. `/t/some-thread/42/` or
/// `https://forum.example.com/t/some-thread/42/post/7/`.
#[derive(Debug, Clone)]
pub struct ThreadLinkParser {
    base_url: Url,
}

impl ThreadLinkParser {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn forum_path<'a>(&self, url: &'a Url) -> Option<&'a str> {
        let prefix = self.base_url.path().trim_end_matches('/');
        url.path().strip_prefix(prefix)
    }
}

impl LinkParser for ThreadLinkParser {
    fn thread_id_from_link(&self, link: &str) -> Option<ThreadId> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }
        let url = self
            .base_url
            .join(link)
            .map_err(|err| log::debug!("Unable to parse thread link '{link}': {err}"))
            .ok()?;
        if url.host() != self.base_url.host() || url.port() != self.base_url.port() {
            return None;
        }
        let captures = THREAD_PATH_REGEX.captures(self.forum_path(&url)?)?;
        captures.name("id")?.as_str().parse().ok()
    }
}
