//! Internet identifiers: emails, user names, domains, addresses.

use std::sync::Arc;

use datamock_core::chars::HEX_POOL;
use datamock_core::Sampler;

use crate::error::MockResult;
use crate::locale::{resolve, Locale};
use crate::person::Person;
use crate::utils::pick_owned;
use crate::word::Word;

const AVATAR_BASE: &str = "https://cdn.fakercloud.com/avatars/";
const PROTOCOLS: &[&str] = &["http", "https"];
const USER_NAME_SEPARATORS: &[&str] = &[".", "_"];
const DOMAIN_FORBIDDEN: &[char] = &[
    '\\', '~', '#', '&', '*', '{', '}', '/', ':', '<', '>', '?', '|', '"', '\'',
];
const BROWSERS: &[&str] = &[
    "Chrome",
    "Firefox",
    "Safari",
    "Edge",
    "Internet Explorer",
    "Opera",
    "SeaMonkey",
];

/// Methods that carry a request body.
pub const PAYLOAD_METHODS: &[&str] = &["POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

/// Methods that never carry a request body.
pub const NON_PAYLOAD_METHODS: &[&str] = &["GET", "HEAD"];

/// Name parts used to build a user name. Missing parts are generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserNameOptions {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailOptions {
    /// Domain after the `@`, a free provider when absent
    pub provider: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<&EmailOptions> for UserNameOptions {
    fn from(options: &EmailOptions) -> Self {
        Self {
            first_name: options.first_name.clone(),
            last_name: options.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Internet {
    sampler: Sampler,
    locale: Arc<Locale>,
    person: Person,
    word: Word,
}

impl Internet {
    pub fn new(sampler: Sampler) -> Self {
        Self::with_locale(sampler, Locale::en())
    }

    pub fn with_locale(sampler: Sampler, locale: Arc<Locale>) -> Self {
        Self {
            person: Person::with_locale(sampler.clone(), Arc::clone(&locale)),
            word: Word::with_locale(sampler.clone(), Arc::clone(&locale)),
            sampler,
            locale,
        }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
        self.set_sampler(self.sampler.clone());
    }

    /// Draw from `sampler` here and in the nested consumers.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.person.set_sampler(sampler.clone());
        self.word.set_sampler(sampler.clone());
        self.sampler = sampler;
    }

    /// Replace the locale. `None` restores English.
    pub fn set_locale(&mut self, locale: Option<Arc<Locale>>) {
        let locale = locale.unwrap_or_else(Locale::en);
        self.person.set_locale(Some(Arc::clone(&locale)));
        self.word.set_locale(Some(Arc::clone(&locale)));
        self.locale = locale;
    }

    /// URL of an avatar image.
    pub fn avatar(&self) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(&self.locale.internet.avatar, &en.internet.avatar);
        let picture = pick_owned(&self.sampler, pool)?;
        Ok(format!("{AVATAR_BASE}{picture}"))
    }

    /// Lowercased `user@provider` address.
    pub fn email(&self, options: &EmailOptions) -> MockResult<String> {
        let provider = match &options.provider {
            Some(provider) => provider.clone(),
            None => {
                let en = Locale::en();
                let pool = resolve(&self.locale.internet.email.free, &en.internet.email.free);
                pick_owned(&self.sampler, pool)?
            }
        };
        let user = self.user_name(&UserNameOptions::from(options))?.to_lowercase();
        Ok(format!("{user}@{provider}"))
    }

    /// Address at one of the reserved example domains.
    pub fn example_email(&self, options: &UserNameOptions) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(
            &self.locale.internet.email.example,
            &en.internet.email.example,
        );
        let provider = pick_owned(&self.sampler, pool)?;
        self.email(&EmailOptions {
            provider: Some(provider),
            first_name: options.first_name.clone(),
            last_name: options.last_name.clone(),
        })
    }

    /// One of `first42`, `first.last`, `first_last7`, without quotes or spaces.
    pub fn user_name(&self, options: &UserNameOptions) -> MockResult<String> {
        let first = match &options.first_name {
            Some(first) => first.clone(),
            None => self.person.first_name(None)?,
        };
        let last = match &options.last_name {
            Some(last) => last.clone(),
            None => self.person.last_name(None)?,
        };

        let raw = match self.sampler.integer(0, 2) {
            0 => format!("{first}{}", self.sampler.integer(0, 99)),
            1 => {
                let separator = self.sampler.pick_one(USER_NAME_SEPARATORS)?;
                format!("{first}{separator}{last}")
            }
            _ => {
                let separator = self.sampler.pick_one(USER_NAME_SEPARATORS)?;
                let number = self.sampler.integer(0, 99);
                format!("{first}{separator}{last}{number}")
            }
        };
        Ok(raw.chars().filter(|&c| c != '\'' && c != ' ').collect())
    }

    pub fn protocol(&self) -> MockResult<String> {
        Ok(self.sampler.pick_one(PROTOCOLS)?.to_string())
    }

    /// HTTP method. `Some(true)` limits to methods with a body,
    /// `Some(false)` to methods without one.
    pub fn http_method(&self, with_payload: Option<bool>) -> MockResult<String> {
        let method = match with_payload {
            Some(true) => *self.sampler.pick_one(PAYLOAD_METHODS)?,
            Some(false) => *self.sampler.pick_one(NON_PAYLOAD_METHODS)?,
            None => {
                let all: Vec<&str> = PAYLOAD_METHODS
                    .iter()
                    .chain(NON_PAYLOAD_METHODS)
                    .copied()
                    .collect();
                *self.sampler.pick_one(&all)?
            }
        };
        Ok(method.to_string())
    }

    /// `protocol://domain`.
    pub fn uri(&self) -> MockResult<String> {
        let protocol = self.protocol()?;
        let domain = self.domain()?;
        Ok(format!("{protocol}://{domain}"))
    }

    pub fn domain(&self) -> MockResult<String> {
        let name = self.domain_name()?;
        let suffix = self.domain_suffix()?;
        Ok(format!("{name}.{suffix}"))
    }

    /// `adjective-noun`, lowercased with URL-unsafe characters removed.
    pub fn domain_name(&self) -> MockResult<String> {
        let adjective = self.word.adjective(None)?;
        let noun = self.word.noun(None)?;
        Ok(format!("{adjective}-{noun}")
            .chars()
            .filter(|c| !DOMAIN_FORBIDDEN.contains(c))
            .collect::<String>()
            .to_lowercase())
    }

    pub fn domain_suffix(&self) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(
            &self.locale.internet.domain.suffix,
            &en.internet.domain.suffix,
        );
        pick_owned(&self.sampler, pool)
    }

    /// Dotted IPv4 address.
    pub fn ip(&self) -> String {
        (0..4)
            .map(|_| self.sampler.integer(0, 255).to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Eight groups of four distinct hex digits.
    pub fn ipv6(&self) -> String {
        let pool: Vec<char> = HEX_POOL.chars().collect();
        (0..8)
            .map(|_| self.sampler.pick(&pool, 4).into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn port(&self) -> u16 {
        self.sampler.integer(0, i64::from(u16::MAX)) as u16
    }

    /// `#rrggbb` color, each channel averaged with the given base.
    pub fn color(&self, red: u8, green: u8, blue: u8) -> String {
        let channel = |base: u8| (self.sampler.integer(0, 256) + i64::from(base)) / 2;
        let r = channel(red);
        let g = channel(green);
        let b = channel(blue);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn browser(&self) -> MockResult<String> {
        Ok(self.sampler.pick_one(BROWSERS)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internet(seed: u32) -> Internet {
        Internet::new(Sampler::from_seed(Some(seed)))
    }

    #[test]
    fn test_avatar_url() {
        let i = internet(1);
        assert!(i.avatar().unwrap().starts_with(AVATAR_BASE));
    }

    #[test]
    fn test_email_shape() {
        let i = internet(2);
        for _ in 0..20 {
            let email = i.email(&EmailOptions::default()).unwrap();
            let (user, provider) = email.split_once('@').unwrap();
            assert!(!user.is_empty());
            assert_eq!(user, user.to_lowercase());
            assert!(Locale::en().internet.email.free.contains(&provider.to_string()));
        }
    }

    #[test]
    fn test_email_with_provider_and_names() {
        let i = internet(3);
        let email = i
            .email(&EmailOptions {
                provider: Some("test.com".to_string()),
                first_name: Some("Pawel".to_string()),
                last_name: Some("Psztyc".to_string()),
            })
            .unwrap();
        assert!(email.ends_with("@test.com"));
        assert!(email.starts_with("pawel"));
    }

    #[test]
    fn test_example_email() {
        let i = internet(4);
        let email = i.example_email(&UserNameOptions::default()).unwrap();
        let provider = email.split('@').nth(1).unwrap();
        assert!(provider.starts_with("example."));
    }

    #[test]
    fn test_user_name_strips_quotes_and_spaces() {
        let i = internet(5);
        for _ in 0..30 {
            let name = i
                .user_name(&UserNameOptions {
                    first_name: Some("Mary Ann".to_string()),
                    last_name: Some("O'Brien".to_string()),
                })
                .unwrap();
            assert!(name.starts_with("MaryAnn"), "{name}");
            assert!(!name.contains('\''));
            assert!(!name.contains(' '));
        }
    }

    #[test]
    fn test_http_method_groups() {
        let i = internet(6);
        for _ in 0..30 {
            let with = i.http_method(Some(true)).unwrap();
            assert!(PAYLOAD_METHODS.contains(&with.as_str()));
            let without = i.http_method(Some(false)).unwrap();
            assert!(NON_PAYLOAD_METHODS.contains(&without.as_str()));
            let any = i.http_method(None).unwrap();
            assert!(PAYLOAD_METHODS.contains(&any.as_str()) || NON_PAYLOAD_METHODS.contains(&any.as_str()));
        }
    }

    #[test]
    fn test_uri_and_domain() {
        let i = internet(7);
        let uri = i.uri().unwrap();
        assert!(uri.starts_with("http://") || uri.starts_with("https://"));

        let domain = i.domain().unwrap();
        assert!(domain.contains('-'));
        assert!(domain.contains('.'));
        assert_eq!(domain, domain.to_lowercase());
    }

    #[test]
    fn test_ip_addresses() {
        let i = internet(8);
        let ip = i.ip();
        let parts: Vec<u32> = ip.split('.').map(|p| p.parse().unwrap()).collect();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|&p| p <= 255));

        let ipv6 = i.ipv6();
        let groups: Vec<&str> = ipv6.split(':').collect();
        assert_eq!(groups.len(), 8);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_color_format() {
        let i = internet(9);
        for _ in 0..50 {
            let color = i.color(0, 0, 0);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));

            let bright = i.color(255, 255, 255);
            let red = u8::from_str_radix(&bright[1..3], 16).unwrap();
            assert!(red >= 127);
        }
    }

    #[test]
    fn test_browser_and_protocol() {
        let i = internet(10);
        assert!(BROWSERS.contains(&i.browser().unwrap().as_str()));
        assert!(PROTOCOLS.contains(&i.protocol().unwrap().as_str()));
    }

    #[test]
    fn test_custom_locale_suffix() {
        let mut i = internet(11);
        let mut locale = Locale::default();
        locale.internet.domain.suffix = vec!["test".to_string()];
        i.set_locale(Some(Arc::new(locale)));
        assert_eq!(i.domain_suffix().unwrap(), "test");
        assert!(i.avatar().unwrap().starts_with(AVATAR_BASE));
    }

    #[test]
    fn test_seed_reproduces_sequence() {
        let mut i = internet(12);
        let first = i.email(&EmailOptions::default()).unwrap();
        i.seed(Some(12));
        assert_eq!(i.email(&EmailOptions::default()).unwrap(), first);
    }
}
