//! Person names, genders and job titles.

use std::sync::Arc;

use datamock_core::Sampler;
use serde::{Deserialize, Serialize};

use crate::error::MockResult;
use crate::locale::{resolve, GenderPools, Locale};
use crate::utils::pick_owned;

const PREFIX_LIKELIHOOD: i64 = 10;
const SUFFIX_LIKELIHOOD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn select(self, pools: &GenderPools) -> &[String] {
        match self {
            Gender::Male => &pools.male,
            Gender::Female => &pools.female,
        }
    }
}

/// Options for [`Person::name`]. Given parts are used verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameOptions {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone)]
pub struct Person {
    sampler: Sampler,
    locale: Arc<Locale>,
}

impl Person {
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

    pub fn locale(&self) -> &Arc<Locale> {
        &self.locale
    }

    fn resolve_gender(&self, gender: Option<Gender>) -> Gender {
        gender.unwrap_or_else(|| {
            if self.sampler.integer(0, 1) == 0 {
                Gender::Male
            } else {
                Gender::Female
            }
        })
    }

    /// First name of the given gender, or of a random one.
    pub fn first_name(&self, gender: Option<Gender>) -> MockResult<String> {
        let gender = self.resolve_gender(gender);
        let en = Locale::en();
        let pool = resolve(
            gender.select(&self.locale.person.first_name),
            gender.select(&en.person.first_name),
        );
        pick_owned(&self.sampler, pool)
    }

    /// Last name. Without a gender the gender-neutral pool is used.
    pub fn last_name(&self, gender: Option<Gender>) -> MockResult<String> {
        let en = Locale::en();
        let pool = match gender {
            None => resolve(
                &self.locale.person.last_name.general,
                &en.person.last_name.general,
            ),
            Some(gender) => resolve(
                gender.select(&self.locale.person.last_name),
                gender.select(&en.person.last_name),
            ),
        };
        pick_owned(&self.sampler, pool)
    }

    /// Middle name, drawn from the first name pool when the locale has no
    /// dedicated middle names.
    pub fn middle_name(&self, gender: Option<Gender>) -> MockResult<String> {
        let gender = self.resolve_gender(gender);
        let en = Locale::en();
        let person = &self.locale.person;
        let pool = resolve(
            gender.select(&person.middle_name),
            resolve(
                gender.select(&person.first_name),
                gender.select(&en.person.first_name),
            ),
        );
        pick_owned(&self.sampler, pool)
    }

    /// Full name with a 10% chance of a prefix and of a suffix.
    pub fn name(&self, options: NameOptions) -> MockResult<String> {
        let mut parts = Vec::with_capacity(4);
        if self.sampler.boolean(PREFIX_LIKELIHOOD)? {
            parts.push(self.prefix(options.gender)?);
        }
        parts.push(match options.first_name {
            Some(first) => first,
            None => self.first_name(options.gender)?,
        });
        parts.push(match options.last_name {
            Some(last) => last,
            None => self.last_name(options.gender)?,
        });
        if self.sampler.boolean(SUFFIX_LIKELIHOOD)? {
            parts.push(self.suffix(options.gender)?);
        }
        Ok(parts.join(" "))
    }

    /// Gender label, from the two main genders when `binary`.
    pub fn gender(&self, binary: bool) -> MockResult<String> {
        let en = Locale::en();
        let info = &self.locale.person.gender;
        let pool = if binary {
            resolve(&info.binary, &en.person.gender.binary)
        } else {
            resolve(&info.pool, &en.person.gender.pool)
        };
        pick_owned(&self.sampler, pool)
    }

    pub fn prefix(&self, gender: Option<Gender>) -> MockResult<String> {
        let en = Locale::en();
        let names = &self.locale.person.prefix;
        if gender.is_none() {
            let general = resolve(&names.general, &en.person.prefix.general);
            if !general.is_empty() {
                return pick_owned(&self.sampler, general);
            }
        }
        let gender = self.resolve_gender(gender);
        let pool = resolve(gender.select(names), gender.select(&en.person.prefix));
        pick_owned(&self.sampler, pool)
    }

    /// Suffix. Locales with a general suffix pool ignore the gender.
    pub fn suffix(&self, gender: Option<Gender>) -> MockResult<String> {
        let en = Locale::en();
        let names = &self.locale.person.suffix;
        let general = resolve(&names.general, &en.person.suffix.general);
        if !general.is_empty() {
            return pick_owned(&self.sampler, general);
        }
        let gender = self.resolve_gender(gender);
        let pool = resolve(gender.select(names), gender.select(&en.person.suffix));
        pick_owned(&self.sampler, pool)
    }

    /// `"<descriptor> <area> <type>"`.
    pub fn job_title(&self) -> MockResult<String> {
        let descriptor = self.job_descriptor()?;
        let area = self.job_area()?;
        let kind = self.job_type()?;
        Ok(format!("{descriptor} {area} {kind}"))
    }

    pub fn job_descriptor(&self) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(
            &self.locale.person.title.descriptor,
            &en.person.title.descriptor,
        );
        pick_owned(&self.sampler, pool)
    }

    pub fn job_area(&self) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(&self.locale.person.title.level, &en.person.title.level);
        pick_owned(&self.sampler, pool)
    }

    pub fn job_type(&self) -> MockResult<String> {
        let en = Locale::en();
        let pool = resolve(&self.locale.person.title.job, &en.person.title.job);
        pick_owned(&self.sampler, pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(seed: u32) -> Person {
        Person::new(Sampler::from_seed(Some(seed)))
    }

    fn custom_locale() -> Arc<Locale> {
        let mut locale = Locale {
            title: "custom".to_string(),
            ..Locale::default()
        };
        locale.person.first_name.male = vec!["Zed".to_string()];
        locale.person.last_name.general = vec!["Quux".to_string()];
        locale.person.title.job = vec!["Wrangler".to_string()];
        Arc::new(locale)
    }

    #[test]
    fn test_first_name_by_gender() {
        let p = person(1);
        let en = Locale::en();
        for _ in 0..20 {
            let male = p.first_name(Some(Gender::Male)).unwrap();
            assert!(en.person.first_name.male.contains(&male));
            let female = p.first_name(Some(Gender::Female)).unwrap();
            assert!(en.person.first_name.female.contains(&female));
        }
    }

    #[test]
    fn test_last_name_general_pool() {
        let p = person(2);
        let en = Locale::en();
        let name = p.last_name(None).unwrap();
        assert!(en.person.last_name.general.contains(&name));
    }

    #[test]
    fn test_name_uses_given_parts() {
        let p = person(3);
        for _ in 0..30 {
            let name = p
                .name(NameOptions {
                    first_name: Some("Pawel".to_string()),
                    last_name: Some("Psztyc".to_string()),
                    gender: None,
                })
                .unwrap();
            assert!(name.contains("Pawel Psztyc"), "{name}");
            assert!(name.split(' ').count() <= 4);
        }
    }

    #[test]
    fn test_gender_pools() {
        let p = person(4);
        for _ in 0..20 {
            let binary = p.gender(true).unwrap();
            assert!(binary == "Female" || binary == "Male");
        }
        let en = Locale::en();
        assert!(en.person.gender.pool.contains(&p.gender(false).unwrap()));
    }

    #[test]
    fn test_prefix_and_suffix_pools() {
        let p = person(5);
        for _ in 0..20 {
            let male = p.prefix(Some(Gender::Male)).unwrap();
            assert!(["Mr.", "Dr."].contains(&male.as_str()));
            let female = p.prefix(Some(Gender::Female)).unwrap();
            assert!(["Mrs.", "Ms.", "Miss"].contains(&female.as_str()));
            let any = p.prefix(None).unwrap();
            assert!(["Mr.", "Mrs.", "Ms.", "Miss", "Dr."].contains(&any.as_str()));
            let suffix = p.suffix(None).unwrap();
            assert!(Locale::en().person.suffix.general.contains(&suffix));
        }
    }

    #[test]
    fn test_job_title_has_three_parts() {
        let p = person(6);
        let title = p.job_title().unwrap();
        assert!(title.split(' ').count() >= 3, "{title}");
    }

    #[test]
    fn test_custom_locale_with_fallback() {
        let mut p = person(7);
        p.set_locale(Some(custom_locale()));
        assert_eq!(p.first_name(Some(Gender::Male)).unwrap(), "Zed");
        assert_eq!(p.last_name(None).unwrap(), "Quux");
        assert_eq!(p.job_type().unwrap(), "Wrangler");

        let female = p.first_name(Some(Gender::Female)).unwrap();
        assert!(Locale::en().person.first_name.female.contains(&female));
        assert_eq!(p.middle_name(Some(Gender::Male)).unwrap(), "Zed");

        p.set_locale(None);
        assert!(Arc::ptr_eq(p.locale(), &Locale::en()));
    }

    #[test]
    fn test_seed_reproduces_names() {
        let mut p = person(8);
        let first: Vec<String> = (0..5).map(|_| p.name(NameOptions::default()).unwrap()).collect();
        p.seed(Some(8));
        let second: Vec<String> = (0..5).map(|_| p.name(NameOptions::default()).unwrap()).collect();
        assert_eq!(first, second);
    }
}
