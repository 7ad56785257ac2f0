//! HTTP Archive (HAR 1.2) metadata: entry timings, creator and browser.

use std::sync::Arc;

use datamock_core::Sampler;
use serde::{Deserialize, Serialize};

use crate::error::MockResult;
use crate::internet::Internet;
use crate::locale::Locale;
use crate::lorem::{Lorem, LoremWordOptions, SentenceOptions};
use crate::software::Software;

pub const HAR_VERSION: &str = "1.2";

/// Upper bound, in milliseconds, of every timing phase.
const MAX_PHASE_MS: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarTimingOptions {
    /// Include the TLS negotiation phase
    pub ssl: bool,
}

/// Phases of one request, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarTiming {
    pub blocked: i64,
    pub connect: i64,
    pub receive: i64,
    pub send: i64,
    pub wait: i64,
    pub dns: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<i64>,
}

/// The `creator` or `browser` object of a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarAgent {
    pub name: String,
    pub version: String,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct Har {
    sampler: Sampler,
    internet: Internet,
    lorem: Lorem,
    software: Software,
}

impl Har {
    pub fn new(sampler: Sampler) -> Self {
        Self::with_locale(sampler, Locale::en())
    }

    pub fn with_locale(sampler: Sampler, locale: Arc<Locale>) -> Self {
        Self {
            internet: Internet::with_locale(sampler.clone(), Arc::clone(&locale)),
            lorem: Lorem::with_locale(sampler.clone(), locale),
            software: Software::new(sampler.clone()),
            sampler,
        }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
        self.set_sampler(self.sampler.clone());
    }

    /// Draw from `sampler` here and in the nested consumers.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.internet.set_sampler(sampler.clone());
        self.lorem.set_sampler(sampler.clone());
        self.software.set_sampler(sampler.clone());
        self.sampler = sampler;
    }

    /// Replace the locale. `None` restores English.
    pub fn set_locale(&mut self, locale: Option<Arc<Locale>>) {
        let locale = locale.unwrap_or_else(Locale::en);
        self.internet.set_locale(Some(Arc::clone(&locale)));
        self.lorem.set_locale(Some(locale));
    }

    fn phase(&self) -> i64 {
        self.sampler.integer(0, MAX_PHASE_MS)
    }

    pub fn timing(&self, options: HarTimingOptions) -> HarTiming {
        HarTiming {
            blocked: self.phase(),
            connect: self.phase(),
            receive: self.phase(),
            send: self.phase(),
            wait: self.phase(),
            dns: self.phase(),
            ssl: options.ssl.then(|| self.phase()),
        }
    }

    pub fn version(&self) -> &'static str {
        HAR_VERSION
    }

    /// Application that produced the log.
    pub fn creator(&self) -> MockResult<HarAgent> {
        let name = self.lorem.word(LoremWordOptions {
            capitalize: true,
            ..LoremWordOptions::default()
        })?;
        Ok(HarAgent {
            name,
            version: self.software.sem_ver(),
            comment: self.lorem.sentence(&SentenceOptions::default())?,
        })
    }

    /// Browser that made the requests.
    pub fn browser(&self) -> MockResult<HarAgent> {
        Ok(HarAgent {
            name: self.internet.browser()?,
            version: self.software.major_minor_version(),
            comment: self.lorem.sentence(&SentenceOptions::default())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn har(seed: u32) -> Har {
        Har::new(Sampler::from_seed(Some(seed)))
    }

    #[test]
    fn test_timing_phases_in_range() {
        let h = har(1);
        for _ in 0..100 {
            let t = h.timing(HarTimingOptions { ssl: true });
            let phases = [t.blocked, t.connect, t.receive, t.send, t.wait, t.dns];
            for phase in phases.into_iter().chain(t.ssl) {
                assert!((0..=MAX_PHASE_MS).contains(&phase), "{phase}");
            }
        }
    }

    #[test]
    fn test_ssl_only_on_request() {
        let h = har(2);
        let plain = h.timing(HarTimingOptions::default());
        assert_eq!(plain.ssl, None);
        let json = serde_json::to_value(plain).unwrap();
        assert!(json.get("ssl").is_none());
        assert!(json["dns"].is_i64());

        assert!(h.timing(HarTimingOptions { ssl: true }).ssl.is_some());
    }

    #[test]
    fn test_version() {
        assert_eq!(har(3).version(), "1.2");
    }

    #[test]
    fn test_creator_and_browser_filled() {
        let h = har(4);
        for agent in [h.creator().unwrap(), h.browser().unwrap()] {
            assert!(!agent.name.is_empty());
            assert!(!agent.version.is_empty());
            assert!(!agent.comment.is_empty());
        }
        let creator = h.creator().unwrap();
        assert!(creator.name.chars().next().unwrap().is_uppercase());
        assert_eq!(creator.version.split('.').count(), 3);
    }

    #[test]
    fn test_seed_changes_timing() {
        let mut h = har(1);
        let first = h.timing(HarTimingOptions { ssl: true });
        h.seed(Some(2));
        let second = h.timing(HarTimingOptions { ssl: true });
        assert_ne!(first, second);

        assert_eq!(second, har(2).timing(HarTimingOptions { ssl: true }));
    }

    #[test]
    fn test_set_locale() {
        let mut h = har(5);
        let mut custom = Locale::default();
        custom.syntax.consonants = "z".to_string();
        custom.syntax.vowels = "a".to_string();
        h.set_locale(Some(Arc::new(custom)));
        let name = h.creator().unwrap().name.to_lowercase();
        assert!(name.chars().all(|c| c == 'z' || c == 'a'), "{name}");

        h.set_locale(None);
        assert!(!h.browser().unwrap().name.is_empty());
    }
}
