//! Pronounceable filler text.
//!
//! Words are assembled from syllables that alternate between the locale's
//! consonants and vowels, so the output looks like text without being any
//! real language.

use std::sync::Arc;

use datamock_core::{CharacterOptions, Sampler};

use crate::error::{MockError, MockResult};
use crate::locale::{resolve_str, Locale};
use crate::utils::capitalize;

const SENTENCE_MARKS: &[&str] = &[".", "?", ";", "!", ":"];
const DEFAULT_WORDS: usize = 3;
const PARAGRAPH_SEPARATOR: &str = "\r\n";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableOptions {
    /// Letters in the syllable, 2 or 3 when absent
    pub length: Option<usize>,
    pub capitalize: bool,
}

/// Options for [`Lorem::word`]. `syllables` and `length` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoremWordOptions {
    pub syllables: Option<usize>,
    pub length: Option<usize>,
    pub capitalize: bool,
}

/// Sentence terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Punctuation {
    /// A period
    #[default]
    Period,
    /// No terminator
    None,
    /// One of `. ? ; ! :`, anything else becomes a period
    Mark(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceOptions {
    /// Word count, 12 to 18 when absent
    pub words: Option<usize>,
    pub punctuation: Punctuation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphOptions {
    /// Sentence count, 3 to 7 when absent
    pub sentences: Option<usize>,
    /// Separate sentences with CRLF instead of a space
    pub line_break: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphsOptions {
    /// Paragraph count, 3 to 7 when absent
    pub size: Option<usize>,
    /// Text between paragraphs, CRLF when absent
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoremKind {
    Word,
    Words,
    Sentence,
    Sentences,
    Paragraph,
    Paragraphs,
}

const LOREM_KINDS: &[LoremKind] = &[
    LoremKind::Word,
    LoremKind::Words,
    LoremKind::Sentence,
    LoremKind::Sentences,
    LoremKind::Paragraph,
    LoremKind::Paragraphs,
];

#[derive(Debug, Clone)]
pub struct Lorem {
    sampler: Sampler,
    locale: Arc<Locale>,
}

impl Lorem {
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

    fn count(&self, given: Option<usize>, min: i64, max: i64) -> usize {
        given.unwrap_or_else(|| self.sampler.integer(min, max) as usize)
    }

    /// Alternating consonant/vowel group.
    pub fn syllable(&self, options: SyllableOptions) -> MockResult<String> {
        let en = Locale::en();
        let consonants = resolve_str(&self.locale.syntax.consonants, &en.syntax.consonants);
        let vowels = resolve_str(&self.locale.syntax.vowels, &en.syntax.vowels);
        let length = self.count(options.length, 2, 3);

        let mut text = String::with_capacity(length);
        let mut previous: Option<char> = None;
        for _ in 0..length {
            let pool = match previous {
                None => format!("{consonants}{vowels}"),
                Some(c) if consonants.contains(c) => vowels.to_string(),
                Some(_) => consonants.to_string(),
            };
            let c = self.sampler.character(&CharacterOptions::pool(pool))?;
            text.push(c);
            previous = Some(c);
        }

        Ok(if options.capitalize {
            capitalize(&text)
        } else {
            text
        })
    }

    pub fn word(&self, options: LoremWordOptions) -> MockResult<String> {
        let syllable = SyllableOptions::default();
        let text = match (options.syllables, options.length) {
            (Some(_), Some(_)) => return Err(MockError::ConflictingWordOptions),
            (None, Some(length)) => {
                let mut text = String::new();
                while text.chars().count() < length {
                    text.push_str(&self.syllable(syllable)?);
                }
                text.chars().take(length).collect()
            }
            (syllables, None) => {
                let syllables = self.count(syllables, 1, 3);
                let mut text = String::new();
                for _ in 0..syllables {
                    text.push_str(&self.syllable(syllable)?);
                }
                text
            }
        };

        Ok(if options.capitalize {
            capitalize(&text)
        } else {
            text
        })
    }

    /// Space separated words, 3 when `count` is absent.
    pub fn words(&self, count: Option<usize>) -> MockResult<String> {
        let count = count.unwrap_or(DEFAULT_WORDS);
        let words = (0..count)
            .map(|_| self.word(LoremWordOptions::default()))
            .collect::<MockResult<Vec<_>>>()?;
        Ok(words.join(" "))
    }

    pub fn sentence(&self, options: &SentenceOptions) -> MockResult<String> {
        let count = self.count(options.words, 12, 18);
        let text = self.words(Some(count))?;
        let mark = match &options.punctuation {
            Punctuation::None => "",
            Punctuation::Period => ".",
            Punctuation::Mark(mark) if SENTENCE_MARKS.contains(&mark.as_str()) => mark.as_str(),
            Punctuation::Mark(_) => ".",
        };
        Ok(format!("{}{mark}", capitalize(&text)))
    }

    /// Space separated sentences, 2 to 6 when `count` is absent.
    pub fn sentences(&self, count: Option<usize>) -> MockResult<String> {
        let count = self.count(count, 2, 6);
        let sentences = (0..count)
            .map(|_| self.sentence(&SentenceOptions::default()))
            .collect::<MockResult<Vec<_>>>()?;
        Ok(sentences.join(" "))
    }

    /// Words joined with dashes.
    pub fn slug(&self, count: Option<usize>) -> MockResult<String> {
        Ok(self.words(count)?.replace(' ', "-"))
    }

    pub fn paragraph(&self, options: ParagraphOptions) -> MockResult<String> {
        let count = self.count(options.sentences, 3, 7);
        let sentences = (0..count)
            .map(|_| self.sentence(&SentenceOptions::default()))
            .collect::<MockResult<Vec<_>>>()?;
        let separator = if options.line_break { "\r\n" } else { " " };
        Ok(sentences.join(separator))
    }

    pub fn paragraphs(&self, options: &ParagraphsOptions) -> MockResult<String> {
        let count = self.count(options.size, 3, 7);
        let paragraphs = (0..count)
            .map(|_| self.paragraph(ParagraphOptions::default()))
            .collect::<MockResult<Vec<_>>>()?;
        let separator = options.separator.as_deref().unwrap_or(PARAGRAPH_SEPARATOR);
        Ok(paragraphs.join(separator))
    }

    /// Output of a randomly chosen generator of this module.
    pub fn lorem(&self) -> MockResult<String> {
        match self.sampler.pick_one(LOREM_KINDS)? {
            LoremKind::Word => self.word(LoremWordOptions::default()),
            LoremKind::Words => self.words(None),
            LoremKind::Sentence => self.sentence(&SentenceOptions::default()),
            LoremKind::Sentences => self.sentences(None),
            LoremKind::Paragraph => self.paragraph(ParagraphOptions::default()),
            LoremKind::Paragraphs => self.paragraphs(&ParagraphsOptions::default()),
        }
    }
}
