//! `multipart/form-data` bodies.

use datamock_core::{Casing, HashOptions};
use serde::{Deserialize, Serialize};

use super::{Http, PAYLOAD_MIMES};
use crate::error::MockResult;
use crate::lorem::SentenceOptions;

/// File name browsers give to unnamed binary parts.
pub const BLOB_FILE_NAME: &str = "blob";

const BOUNDARY_PREFIX: &str = "----datamockFormBoundary";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPartOptions {
    /// Plain string value instead of a typed blob
    pub clear_text: bool,
    /// Content type of the blob, drawn when absent
    pub text_mime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDataOptions {
    /// Every part is a named file
    pub file_part: bool,
    /// Every part is a text part, ignored with `file_part`
    pub text_part: bool,
    pub clear_text: bool,
    pub text_mime: Option<String>,
    /// Part count, 1 to 10 when absent
    pub parts: Option<usize>,
}

/// One entry of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        content: String,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FormPart::File { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub boundary: String,
    pub parts: Vec<FormPart>,
}

impl FormData {
    /// Value for the `content-type` header of a request carrying this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encoded body with CRLF line endings and a closing delimiter.
    pub fn to_body(&self) -> String {
        let mut body = String::new();
        for part in &self.parts {
            body.push_str(&format!("--{}\r\n", self.boundary));
            match part {
                FormPart::Text { name, value } => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                    ));
                }
                FormPart::File {
                    name,
                    file_name,
                    mime,
                    content,
                } => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                    ));
                    body.push_str(&format!("Content-Type: {mime}\r\n\r\n{content}\r\n"));
                }
            }
        }
        body.push_str(&format!("--{}--\r\n", self.boundary));
        body
    }
}

fn extension(mime: &str) -> &'static str {
    match mime {
        "application/json" => "json",
        "application/xml" | "text/xml" => "xml",
        "image/svg+xml" => "svg",
        mime if mime.ends_with("+json") => "json",
        mime if mime.ends_with("+xml") => "xml",
        _ => "txt",
    }
}

impl Http {
    fn part_name(&self) -> MockResult<String> {
        Ok(self.word.noun(None)?.to_lowercase())
    }

    fn blob_mime(&self, mime: Option<&str>) -> MockResult<String> {
        match mime {
            Some(mime) => Ok(mime.to_string()),
            None => Ok(self.sampler.pick_one(PAYLOAD_MIMES)?.to_string()),
        }
    }

    /// Named file with a typed body.
    pub fn file_part(&self) -> MockResult<FormPart> {
        let name = self.part_name()?;
        let mime = self.blob_mime(None)?;
        let stem = self.word.noun(None)?.to_lowercase();
        let file_name = format!("{stem}.{}", extension(&mime));
        let content = self.payload(Some(&mime))?;
        Ok(FormPart::File {
            name,
            file_name,
            mime,
            content,
        })
    }

    /// Plain text value or an unnamed blob of `text_mime`.
    pub fn text_part(&self, options: &TextPartOptions) -> MockResult<FormPart> {
        let name = self.part_name()?;
        if options.clear_text {
            let value = self.lorem.sentence(&SentenceOptions::default())?;
            return Ok(FormPart::Text { name, value });
        }
        let mime = self.blob_mime(options.text_mime.as_deref())?;
        let content = self.payload(Some(&mime))?;
        Ok(FormPart::File {
            name,
            file_name: BLOB_FILE_NAME.to_string(),
            mime,
            content,
        })
    }

    /// Form of file and text parts under a random boundary.
    pub fn form(&self, options: &FormDataOptions) -> MockResult<FormData> {
        let count = options
            .parts
            .unwrap_or_else(|| self.sampler.integer(1, 10) as usize);
        let text_options = TextPartOptions {
            clear_text: options.clear_text,
            text_mime: options.text_mime.clone(),
        };

        let mut parts = Vec::with_capacity(count);
        for _ in 0..count {
            let file = if options.file_part {
                true
            } else if options.text_part {
                false
            } else {
                self.sampler.boolean(50)?
            };
            parts.push(if file {
                self.file_part()?
            } else {
                self.text_part(&text_options)?
            });
        }

        let boundary = format!(
            "{BOUNDARY_PREFIX}{}",
            self.sampler.hash(HashOptions {
                length: 16,
                casing: Some(Casing::Lower),
            })
        );
        Ok(FormData { boundary, parts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use datamock_core::Sampler;

    use crate::locale::Locale;

    fn http(seed: u32) -> Http {
        Http::new(Sampler::from_seed(Some(seed)))
    }

    #[test]
    fn test_file_part() {
        let h = http(1);
        for _ in 0..20 {
            let FormPart::File {
                name,
                file_name,
                mime,
                content,
            } = h.file_part().unwrap()
            else {
                panic!("file_part produced a text part");
            };
            assert!(!name.is_empty());
            assert!(file_name.ends_with(&format!(".{}", extension(&mime))));
            assert!(file_name.len() > extension(&mime).len() + 1);
            assert!(PAYLOAD_MIMES.contains(&mime.as_str()));
            assert!(!content.is_empty());
        }
    }

    #[test]
    fn test_text_part_kinds() {
        let h = http(2);
        let text = h
            .text_part(&TextPartOptions {
                clear_text: true,
                ..TextPartOptions::default()
            })
            .unwrap();
        assert!(matches!(&text, FormPart::Text { value, .. } if value.ends_with('.')));

        let blob = h
            .text_part(&TextPartOptions {
                text_mime: Some("application/json".to_string()),
                ..TextPartOptions::default()
            })
            .unwrap();
        let FormPart::File {
            file_name,
            mime,
            content,
            ..
        } = blob
        else {
            panic!("typed text part should be a blob");
        };
        assert_eq!(file_name, BLOB_FILE_NAME);
        assert_eq!(mime, "application/json");
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }

    #[test]
    fn test_form_has_parts() {
        let h = http(3);
        for _ in 0..10 {
            let form = h.form(&FormDataOptions::default()).unwrap();
            assert!((1..=10).contains(&form.parts.len()));
            assert!(form.boundary.starts_with(BOUNDARY_PREFIX));
        }
    }

    #[test]
    fn test_form_forced_part_kinds() {
        let h = http(4);
        let files = h
            .form(&FormDataOptions {
                file_part: true,
                parts: Some(5),
                ..FormDataOptions::default()
            })
            .unwrap();
        assert_eq!(files.parts.len(), 5);
        assert!(files.parts.iter().all(FormPart::is_file));

        let texts = h
            .form(&FormDataOptions {
                text_part: true,
                clear_text: true,
                parts: Some(5),
                ..FormDataOptions::default()
            })
            .unwrap();
        assert_eq!(texts.parts.len(), 5);
        assert!(texts
            .parts
            .iter()
            .all(|part| matches!(part, FormPart::Text { .. })));
    }

    #[test]
    fn test_multipart_body() {
        let form = FormData {
            boundary: "xyz".to_string(),
            parts: vec![
                FormPart::Text {
                    name: "title".to_string(),
                    value: "Hello".to_string(),
                },
                FormPart::File {
                    name: "doc".to_string(),
                    file_name: "a.json".to_string(),
                    mime: "application/json".to_string(),
                    content: "{}".to_string(),
                },
            ],
        };
        assert_eq!(form.content_type(), "multipart/form-data; boundary=xyz");
        assert_eq!(
            form.to_body(),
            "--xyz\r\n\
             Content-Disposition: form-data; name=\"title\"\r\n\r\n\
             Hello\r\n\
             --xyz\r\n\
             Content-Disposition: form-data; name=\"doc\"; filename=\"a.json\"\r\n\
             Content-Type: application/json\r\n\r\n\
             {}\r\n\
             --xyz--\r\n"
        );
    }

    #[test]
    fn test_locale_reaches_part_names() {
        let mut h = http(5);
        let mut custom = Locale::default();
        custom.word.noun = vec!["Gizmo".to_string()];
        h.set_locale(Some(Arc::new(custom)));
        let form = h
            .form(&FormDataOptions {
                parts: Some(3),
                ..FormDataOptions::default()
            })
            .unwrap();
        assert!(form.parts.iter().all(|part| part.name() == "gizmo"));
    }

    #[test]
    fn test_seed_reproduces_form() {
        let a = http(6).form(&FormDataOptions::default()).unwrap();
        let b = http(6).form(&FormDataOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
