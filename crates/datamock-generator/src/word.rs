//! Dictionary words by part of speech.

use std::sync::Arc;

use datamock_core::Sampler;

use crate::error::MockResult;
use crate::locale::{resolve, Locale, WordLocale};
use crate::utils::pick_owned;

#[derive(Debug, Clone)]
pub struct Word {
    sampler: Sampler,
    locale: Arc<Locale>,
}

impl Word {
    pub fn new(sampler: Sampler) -> Self {
        Self::with_locale(sampler, Locale::en())
    }

    pub fn with_locale(sampler: Sampler, locale: Arc<Locale>) -> Self {
        Self { sampler, locale }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
    }

    /// Draw from `sampler` from now on.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    /// Replace the locale. `None` restores English.
    pub fn set_locale(&mut self, locale: Option<Arc<Locale>>) {
        self.locale = locale.unwrap_or_else(Locale::en);
    }

    /// Pick from the pool selected by `part`, preferring words of `size`
    /// characters when any exist.
    fn pick(&self, part: fn(&WordLocale) -> &Vec<String>, size: Option<usize>) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(part(&self.locale.word), part(&en.word));
        if let Some(size) = size {
            let sized: Vec<String> = pool
                .iter()
                .filter(|w| w.chars().count() == size)
                .cloned()
                .collect();
            if !sized.is_empty() {
                return pick_owned(&self.sampler, &sized);
            }
        }
        pick_owned(&self.sampler, pool)
    }

    pub fn adjective(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.adjective, size)
    }

    pub fn adverb(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.adverb, size)
    }

    pub fn conjunction(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.conjunction, size)
    }

    pub fn interjection(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.interjection, size)
    }

    pub fn noun(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.noun, size)
    }

    pub fn preposition(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.preposition, size)
    }

    pub fn verb(&self, size: Option<usize>) -> MockResult<String> {
        self.pick(|w| &w.verb, size)
    }
}
