//! Header lists rendered as `name: value` lines.

use datamock_core::{Casing, HashOptions};

use super::{Http, HeaderKind};
use crate::error::{MockError, MockResult};
use crate::time::{format_date_time, DateTimeFormat};

const DEFAULT_MIN_HEADERS: usize = 0;
const DEFAULT_MAX_HEADERS: usize = 10;

/// Content types offered by [`Http::content_type`].
pub const MIME_TYPES: &[&str] = &[
    "application/json",
    "application/xml",
    "application/x-www-form-urlencoded",
    "image/svg+xml",
    "text/plain",
    "text/html",
];

const LINK_RELATIONS: &[&str] = &["next", "prev", "first", "last", "alternate", "canonical"];
const ENCODINGS: &[&str] = &["gzip", "deflate", "br", "identity"];
const LANGUAGES: &[&str] = &["en-US", "en", "pl", "de", "fr", "es"];
const CACHE_DIRECTIVES: &[&str] = &["no-cache", "no-store", "max-age=0", "must-revalidate", "private"];
const CONNECTIONS: &[&str] = &["keep-alive", "close"];
const SERVERS: &[&str] = &["nginx", "Apache", "cloudflare", "Microsoft-IIS/10.0", "gws"];
const VARY: &[&str] = &["accept", "accept-encoding", "origin", "user-agent"];

const REQUEST_GROUPS: &[(&str, &[&str])] = &[
    ("cors", &["origin"]),
    (
        "caching",
        &["cache-control", "if-modified-since", "if-none-match", "pragma"],
    ),
    (
        "content",
        &["accept", "accept-encoding", "accept-language", "content-type", "content-length"],
    ),
    (
        "general",
        &["authorization", "connection", "cookie", "date", "host", "referer", "user-agent", "x-request-id"],
    ),
];

const RESPONSE_GROUPS: &[(&str, &[&str])] = &[
    ("cors", &["access-control-allow-origin"]),
    ("caching", &["age", "expires", "pragma", "cache-control"]),
    (
        "content",
        &["content-type", "content-length", "etag", "last-modified", "vary"],
    ),
    (
        "general",
        &["access-control-allow-methods", "date", "link", "location", "server", "set-cookie", "x-request-id"],
    ),
];

/// Options for [`Http::headers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersOptions {
    /// Named group (`cors`, `caching`, `content`, `general`) to draw from
    pub group: Option<String>,
    /// Exact number of generated names, overrides `min`/`max`
    pub length: Option<usize>,
    pub min: Option<usize>,
    pub max: Option<usize>,
    /// Every generated name must be distinct
    pub no_multi: bool,
    /// Value of a single `content-type` header added to the list
    pub mime: Option<String>,
    /// Explicit header names to draw from, overrides `group`
    pub pool: Option<Vec<String>>,
}

/// Separator used when a header is generated more than once, `None` for
/// headers that may appear only once.
fn multi_separator(name: &str) -> Option<&'static str> {
    match name {
        "cookie" => Some("; "),
        "accept" | "accept-encoding" | "accept-language" | "cache-control" | "vary"
        | "access-control-allow-methods" => Some(", "),
        _ => None,
    }
}

fn groups(kind: HeaderKind) -> &'static [(&'static str, &'static [&'static str])] {
    match kind {
        HeaderKind::Request => REQUEST_GROUPS,
        HeaderKind::Response => RESPONSE_GROUPS,
    }
}

impl Http {
    fn header_pool(&self, kind: HeaderKind, options: &HeadersOptions) -> Vec<String> {
        if let Some(pool) = &options.pool {
            return pool.clone();
        }
        let groups = groups(kind);
        if let Some(group) = &options.group {
            if let Some((_, names)) = groups.iter().find(|(name, _)| *name == group.as_str()) {
                return names.iter().map(|s| s.to_string()).collect();
            }
        }
        groups
            .iter()
            .flat_map(|(_, names)| names.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Header names to render, before merging and the `mime` override.
    fn collect_headers(&self, kind: HeaderKind, options: &HeadersOptions) -> MockResult<Vec<String>> {
        let pool = self.header_pool(kind, options);
        let count = match options.length {
            Some(length) => length,
            None => {
                let min = options.min.unwrap_or(DEFAULT_MIN_HEADERS) as i64;
                let max = options.max.unwrap_or(DEFAULT_MAX_HEADERS) as i64;
                self.sampler.integer(min, max) as usize
            }
        };
        if count == 0 {
            return Ok(Vec::new());
        }
        if options.no_multi {
            if pool.len() < count {
                return Err(MockError::InvalidHeaderConfiguration);
            }
            return Ok(self.sampler.pick(&pool, count as i64));
        }
        if pool.is_empty() {
            return Err(MockError::InvalidHeaderConfiguration);
        }
        (0..count)
            .map(|_| Ok(self.sampler.pick_one(&pool)?.clone()))
            .collect()
    }

    /// Header block of `kind`, one `name: value` per line.
    pub fn headers(&self, kind: HeaderKind, options: &HeadersOptions) -> MockResult<String> {
        let names = self.collect_headers(kind, options)?;
        self.render_headers(&names, options.mime.as_deref())
    }

    /// Render `names` in order. Repeated multi-value headers are merged with
    /// their separator, repeated singular headers are dropped. With `mime`
    /// the list carries exactly one `content-type` with that value.
    pub(crate) fn render_headers(&self, names: &[String], mime: Option<&str>) -> MockResult<String> {
        let mut headers: Vec<(String, Vec<String>)> = Vec::new();
        for name in names {
            let name = name.to_lowercase();
            if mime.is_some() && name == "content-type" {
                continue;
            }
            match headers.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, values)) => {
                    if multi_separator(&name).is_some() {
                        values.push(self.header_value(&name)?);
                    }
                }
                None => {
                    let value = self.header_value(&name)?;
                    headers.push((name, vec![value]));
                }
            }
        }
        if let Some(mime) = mime {
            headers.push(("content-type".to_string(), vec![mime.to_string()]));
        }

        Ok(headers
            .iter()
            .map(|(name, values)| {
                let separator = multi_separator(name).unwrap_or(", ");
                format!("{name}: {}", values.join(separator))
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn http_date(&self) -> MockResult<String> {
        let date = self.time.date(Default::default())?;
        Ok(format_date_time(&date, DateTimeFormat::Rfc2616))
    }

    fn token(&self, length: usize) -> String {
        self.sampler.hash(HashOptions {
            length,
            casing: Some(Casing::Lower),
        })
    }

    fn header_value(&self, name: &str) -> MockResult<String> {
        let value = match name {
            "accept" | "content-type" => self.content_type()?,
            "accept-encoding" => self.sampler.pick_one(ENCODINGS)?.to_string(),
            "accept-language" => self.sampler.pick_one(LANGUAGES)?.to_string(),
            "access-control-allow-origin" => {
                if self.sampler.boolean(50)? {
                    "*".to_string()
                } else {
                    self.internet.uri()?
                }
            }
            "access-control-allow-methods" => self.internet.http_method(None)?,
            "age" => self.sampler.integer(0, 86_400).to_string(),
            "authorization" => format!("Bearer {}", self.token(32)),
            "cache-control" => self.sampler.pick_one(CACHE_DIRECTIVES)?.to_string(),
            "connection" => self.sampler.pick_one(CONNECTIONS)?.to_string(),
            "content-length" => self.sampler.integer(0, 10_000).to_string(),
            "cookie" | "set-cookie" => format!("{}={}", self.word.noun(None)?, self.token(12)),
            "date" | "expires" | "if-modified-since" | "last-modified" => self.http_date()?,
            "etag" | "if-none-match" => format!("\"{}\"", self.token(16)),
            "host" => self.internet.domain()?,
            "link" => self.link()?,
            "location" | "origin" => self.internet.uri()?,
            "pragma" => "no-cache".to_string(),
            "referer" => format!("{}/{}", self.internet.uri()?, self.word.noun(None)?),
            "server" => self.sampler.pick_one(SERVERS)?.to_string(),
            "user-agent" => format!(
                "Mozilla/5.0 {}/{}",
                self.internet.browser()?,
                self.software.major_minor_version()
            ),
            "vary" => self.sampler.pick_one(VARY)?.to_string(),
            "x-request-id" => self.sampler.uuid().to_string(),
            _ => self.word.noun(None)?,
        };
        Ok(value)
    }

    /// `<uri>; rel="relation"`
    pub fn link(&self) -> MockResult<String> {
        let uri = self.internet.uri()?;
        let rel = self.sampler.pick_one(LINK_RELATIONS)?;
        Ok(format!("<{uri}>; rel=\"{rel}\""))
    }

    pub fn content_type(&self) -> MockResult<String> {
        Ok(self.sampler.pick_one(MIME_TYPES)?.to_string())
    }
}
