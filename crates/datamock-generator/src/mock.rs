//! Single entry point owning every consumer.

use std::sync::Arc;

use datamock_core::{Sampler, SeedRegistry};
use tracing::debug;

use crate::har::Har;
use crate::http::Http;
use crate::internet::Internet;
use crate::locale::Locale;
use crate::lorem::Lorem;
use crate::person::Person;
use crate::software::Software;
use crate::svg::Svg;
use crate::time::Time;
use crate::word::Word;

/// Construction options for [`DataMock`].
#[derive(Debug, Clone, Default)]
pub struct DataMockInit {
    pub seed: Option<u32>,
    pub locale: Option<Locale>,
}

/// All consumers drawing from one engine.
///
/// The engine comes from a registry owned by this value, so two instances
/// built with the same seed produce the same values call for call.
///
/// ```rust
/// use datamock_generator::{DataMock, DataMockInit};
///
/// let a = DataMock::new(DataMockInit { seed: Some(7), ..Default::default() });
/// let b = DataMock::new(DataMockInit { seed: Some(7), ..Default::default() });
/// assert_eq!(a.person().job_title().unwrap(), b.person().job_title().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DataMock {
    registry: Arc<SeedRegistry>,
    locale: Arc<Locale>,
    sampler: Sampler,
    person: Person,
    internet: Internet,
    word: Word,
    lorem: Lorem,
    time: Time,
    software: Software,
    http: Http,
    har: Har,
    svg: Svg,
}

impl Default for DataMock {
    fn default() -> Self {
        Self::new(DataMockInit::default())
    }
}

impl DataMock {
    pub fn new(init: DataMockInit) -> Self {
        let registry = Arc::new(SeedRegistry::new());
        let locale = init.locale.map(Arc::new).unwrap_or_else(Locale::en);
        let sampler = Sampler::new(Arc::clone(&registry), init.seed);
        debug!(seed = ?init.seed, locale = %locale.title, "Creating data mock");

        Self {
            person: Person::with_locale(sampler.clone(), Arc::clone(&locale)),
            internet: Internet::with_locale(sampler.clone(), Arc::clone(&locale)),
            word: Word::with_locale(sampler.clone(), Arc::clone(&locale)),
            lorem: Lorem::with_locale(sampler.clone(), Arc::clone(&locale)),
            time: Time::with_locale(sampler.clone(), Arc::clone(&locale)),
            software: Software::new(sampler.clone()),
            http: Http::with_locale(sampler.clone(), Arc::clone(&locale)),
            har: Har::with_locale(sampler.clone(), Arc::clone(&locale)),
            svg: Svg::new(sampler.clone()),
            registry,
            locale,
            sampler,
        }
    }

    /// Switch every consumer to the engine for `seed`.
    ///
    /// A seed used before on this instance continues where its stream left
    /// off.
    pub fn seed(&mut self, seed: Option<u32>) {
        debug!(?seed, "Reseeding data mock");
        self.sampler.seed(seed);
        let sampler = self.sampler.clone();
        self.person.set_sampler(sampler.clone());
        self.internet.set_sampler(sampler.clone());
        self.word.set_sampler(sampler.clone());
        self.lorem.set_sampler(sampler.clone());
        self.time.set_sampler(sampler.clone());
        self.software.set_sampler(sampler.clone());
        self.http.set_sampler(sampler.clone());
        self.har.set_sampler(sampler.clone());
        self.svg.set_sampler(sampler);
    }

    /// Replace the locale of every locale-aware consumer. `None` restores
    /// English.
    pub fn set_locale(&mut self, locale: Option<Locale>) {
        let locale = locale.map(Arc::new).unwrap_or_else(Locale::en);
        debug!(locale = %locale.title, "Switching locale");
        self.person.set_locale(Some(Arc::clone(&locale)));
        self.internet.set_locale(Some(Arc::clone(&locale)));
        self.word.set_locale(Some(Arc::clone(&locale)));
        self.lorem.set_locale(Some(Arc::clone(&locale)));
        self.time.set_locale(Some(Arc::clone(&locale)));
        self.http.set_locale(Some(Arc::clone(&locale)));
        self.har.set_locale(Some(Arc::clone(&locale)));
        self.locale = locale;
    }

    pub fn locale(&self) -> &Arc<Locale> {
        &self.locale
    }

    pub fn registry(&self) -> &Arc<SeedRegistry> {
        &self.registry
    }

    /// Primitive sampling: numbers, booleans, characters, hashes, UUIDs.
    pub fn types(&self) -> &Sampler {
        &self.sampler
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn internet(&self) -> &Internet {
        &self.internet
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn lorem(&self) -> &Lorem {
        &self.lorem
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn software(&self) -> &Software {
        &self.software
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn har(&self) -> &Har {
        &self.har
    }

    pub fn svg(&self) -> &Svg {
        &self.svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorem::LoremWordOptions;
    use crate::person::NameOptions;
    use crate::software::VersionOptions;

    fn seeded(seed: u32) -> DataMock {
        DataMock::new(DataMockInit {
            seed: Some(seed),
            locale: None,
        })
    }

    fn sample(mock: &DataMock) -> Vec<String> {
        vec![
            mock.person().name(NameOptions::default()).unwrap(),
            mock.internet().email(&Default::default()).unwrap(),
            mock.word().noun(None).unwrap(),
            mock.lorem().word(LoremWordOptions::default()).unwrap(),
            mock.software().version(VersionOptions::default()),
            mock.types().integer(0, 1000).to_string(),
            mock.types().uuid().to_string(),
            format!("{:?}", mock.har().timing(Default::default())),
        ]
    }

    #[test]
    fn test_same_seed_same_values() {
        assert_eq!(sample(&seeded(42)), sample(&seeded(42)));
        assert_ne!(sample(&seeded(42)), sample(&seeded(43)));
    }

    #[test]
    fn test_consumers_share_one_engine() {
        let mock = seeded(1);
        assert!(mock.types().engine().ptr_eq(mock.sampler.engine()));
        assert_eq!(mock.registry().len(), 1);
        assert!(mock.registry().contains(1));
    }

    #[test]
    fn test_reseed_matches_fresh_instance() {
        let mut mock = seeded(1);
        let _ = sample(&mock);
        mock.seed(Some(9));
        assert_eq!(sample(&mock), sample(&seeded(9)));
        assert_eq!(mock.registry().len(), 2);
    }

    #[test]
    fn test_reseed_with_known_seed_continues_stream() {
        let mut mock = seeded(5);
        let reference = seeded(5);
        let first = sample(&mock);
        assert_eq!(first, sample(&reference));

        mock.seed(Some(6));
        mock.seed(Some(5));
        assert_eq!(sample(&mock), sample(&reference));
    }

    #[test]
    fn test_set_locale() {
        let mut mock = seeded(3);
        assert_eq!(mock.locale().title, "English");

        let mut custom = Locale {
            title: "Test".to_string(),
            ..Locale::default()
        };
        custom.word.noun = vec!["gizmo".to_string()];
        custom.person.title.job = vec!["Tester".to_string()];
        mock.set_locale(Some(custom));

        assert_eq!(mock.locale().title, "Test");
        assert_eq!(mock.word().noun(None).unwrap(), "gizmo");
        assert_eq!(mock.person().job_type().unwrap(), "Tester");

        mock.set_locale(None);
        assert!(Arc::ptr_eq(mock.locale(), &Locale::en()));
        assert_ne!(mock.person().job_type().unwrap(), "Tester");
    }
}
