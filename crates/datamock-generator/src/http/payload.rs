//! Request and response bodies.

use serde_json::{Map, Value};

use super::Http;
use crate::error::MockResult;
use crate::lorem::{ParagraphOptions, SentenceOptions};
use crate::svg::{SvgImageOptions, XML_PROLOG};

/// Content types [`Http::payload`] produces structured bodies for.
pub const PAYLOAD_MIMES: &[&str] = &[
    "application/x-www-form-urlencoded",
    "application/json",
    "application/xml",
    "image/svg+xml",
];

/// Whether a message carries a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Always produce a body
    pub force: bool,
    /// Never produce a body, wins over `force`
    pub no_payload: bool,
}

impl Http {
    pub fn is_payload(&self, options: PayloadOptions) -> MockResult<bool> {
        if options.no_payload {
            return Ok(false);
        }
        if options.force {
            return Ok(true);
        }
        Ok(self.sampler.boolean(50)?)
    }

    /// `true` when `mime` is absent or has a structured body generator.
    pub fn supports_payload(&self, mime: Option<&str>) -> bool {
        match mime {
            None => true,
            Some(mime) => PAYLOAD_MIMES.contains(&mime),
        }
    }

    fn field_count(&self) -> usize {
        self.sampler.integer(1, 5) as usize
    }

    /// `key=value` pairs joined with `&`.
    pub fn url_encoded(&self) -> MockResult<String> {
        let pairs = (0..self.field_count())
            .map(|_| {
                let key = self.word.noun(None)?;
                let value = self.word.adjective(None)?;
                Ok(format!("{key}={value}"))
            })
            .collect::<MockResult<Vec<_>>>()?;
        Ok(pairs.join("&"))
    }

    /// Pretty printed JSON object with scalar members.
    pub fn json(&self) -> MockResult<String> {
        let mut object = Map::new();
        for _ in 0..self.field_count() {
            let key = self.word.noun(None)?;
            let value = match self.sampler.integer(0, 2) {
                0 => Value::from(self.lorem.sentence(&SentenceOptions::default())?),
                1 => Value::from(self.sampler.integer(0, 10_000)),
                _ => Value::from(self.sampler.boolean(50)?),
            };
            object.insert(key, value);
        }
        Ok(format!("{:#}", Value::Object(object)))
    }

    /// XML document with one element per field under a single root.
    pub fn xml(&self) -> MockResult<String> {
        let root = self.word.noun(None)?.to_lowercase();
        let mut lines = vec![XML_PROLOG.to_string(), format!("<{root}>")];
        for _ in 0..self.field_count() {
            let name = self.word.noun(None)?.to_lowercase();
            let text = self.lorem.words(None)?;
            lines.push(format!("  <{name}>{text}</{name}>"));
        }
        lines.push(format!("</{root}>"));
        Ok(lines.join("\n"))
    }

    pub fn svg(&self) -> MockResult<String> {
        self.svg.image(SvgImageOptions::default())
    }

    /// Body matching `mime`. Unknown or missing types get plain text.
    pub fn payload(&self, mime: Option<&str>) -> MockResult<String> {
        match mime {
            Some("application/json") => self.json(),
            Some("application/x-www-form-urlencoded") => self.url_encoded(),
            Some("image/svg+xml") => self.svg(),
            Some("application/xml") => self.xml(),
            Some(mime) if mime.ends_with("+json") => self.json(),
            Some(mime) if mime.ends_with("+xml") || mime == "text/xml" => self.xml(),
            _ => self.lorem.paragraph(ParagraphOptions::default()),
        }
    }
}
