//! HTTP messages: headers, bodies, forms, requests and responses.

mod form_data;
mod headers;
mod payload;

use std::sync::Arc;

use datamock_core::Sampler;
use serde::{Deserialize, Serialize};

use crate::error::MockResult;
use crate::internet::{Internet, NON_PAYLOAD_METHODS};
use crate::locale::Locale;
use crate::lorem::Lorem;
use crate::software::Software;
use crate::svg::Svg;
use crate::time::Time;
use crate::word::Word;

pub use form_data::{FormData, FormDataOptions, FormPart, TextPartOptions, BLOB_FILE_NAME};
pub use headers::{HeadersOptions, MIME_TYPES};
pub use payload::{PayloadOptions, PAYLOAD_MIMES};

/// Which side of the exchange a header block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    Request,
    Response,
}

/// Status codes with their reason phrases.
pub const STATUS_CODES: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (204, "No Content"),
    (206, "Partial Content"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (409, "Conflict"),
    (422, "Unprocessable Entity"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
];

/// Status codes [`Http::redirect_status`] draws from.
pub const REDIRECT_CODES: &[u16] = &[301, 302, 303, 307, 308];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Fixed method, drawn when absent
    pub method: Option<String>,
    pub payload: PayloadOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    pub method: String,
    pub headers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseOptions {
    /// Leading digit of the status code, any class when absent
    pub status_group: Option<u16>,
    pub payload: PayloadOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub code: u16,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct Http {
    sampler: Sampler,
    internet: Internet,
    word: Word,
    lorem: Lorem,
    time: Time,
    software: Software,
    svg: Svg,
}

impl Http {
    pub fn new(sampler: Sampler) -> Self {
        Self::with_locale(sampler, Locale::en())
    }

    pub fn with_locale(sampler: Sampler, locale: Arc<Locale>) -> Self {
        Self {
            internet: Internet::with_locale(sampler.clone(), Arc::clone(&locale)),
            word: Word::with_locale(sampler.clone(), Arc::clone(&locale)),
            lorem: Lorem::with_locale(sampler.clone(), Arc::clone(&locale)),
            time: Time::with_locale(sampler.clone(), locale),
            software: Software::new(sampler.clone()),
            svg: Svg::new(sampler.clone()),
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
        self.word.set_sampler(sampler.clone());
        self.lorem.set_sampler(sampler.clone());
        self.time.set_sampler(sampler.clone());
        self.software.set_sampler(sampler.clone());
        self.svg.set_sampler(sampler.clone());
        self.sampler = sampler;
    }

    /// Replace the locale. `None` restores English.
    pub fn set_locale(&mut self, locale: Option<Arc<Locale>>) {
        let locale = locale.unwrap_or_else(Locale::en);
        self.internet.set_locale(Some(Arc::clone(&locale)));
        self.word.set_locale(Some(Arc::clone(&locale)));
        self.lorem.set_locale(Some(Arc::clone(&locale)));
        self.time.set_locale(Some(locale));
    }

    /// Content type and body when `options` calls for a payload.
    fn body(&self, options: PayloadOptions) -> MockResult<Option<(String, String)>> {
        if !self.is_payload(options)? {
            return Ok(None);
        }
        let mime = self.content_type()?;
        let payload = self.payload(Some(&mime))?;
        Ok(Some((mime, payload)))
    }

    /// Request with a URL, a method, headers and an optional body.
    ///
    /// `GET` and `HEAD` never carry a body. A forced payload picks a method
    /// that can carry one.
    pub fn request(&self, options: &RequestOptions) -> MockResult<HttpRequest> {
        let method = match &options.method {
            Some(method) => method.to_uppercase(),
            None if options.payload.no_payload => self.internet.http_method(Some(false))?,
            None if options.payload.force => self.internet.http_method(Some(true))?,
            None => self.internet.http_method(None)?,
        };
        let url = format!("{}/{}", self.internet.uri()?, self.word.noun(None)?);

        let payload_options = if NON_PAYLOAD_METHODS.contains(&method.as_str()) {
            PayloadOptions {
                no_payload: true,
                ..options.payload
            }
        } else {
            options.payload
        };
        let body = self.body(payload_options)?;
        let header_options = HeadersOptions {
            mime: body.as_ref().map(|(mime, _)| mime.clone()),
            ..HeadersOptions::default()
        };
        let headers = self.headers(HeaderKind::Request, &header_options)?;

        Ok(HttpRequest {
            url,
            method,
            headers,
            payload: body.map(|(_, payload)| payload),
        })
    }

    /// Response with a status line, headers and an optional body.
    pub fn response(&self, options: &ResponseOptions) -> MockResult<HttpResponse> {
        let StatusInfo { code, status } = self.status(options.status_group)?;
        let body = self.body(options.payload)?;
        let header_options = HeadersOptions {
            mime: body.as_ref().map(|(mime, _)| mime.clone()),
            ..HeadersOptions::default()
        };
        let headers = self.headers(HeaderKind::Response, &header_options)?;

        Ok(HttpResponse {
            status: code,
            status_text: status,
            headers,
            payload: body.map(|(_, payload)| payload),
        })
    }

    /// Status code and reason phrase, limited to a class such as `2` for 2xx.
    pub fn status(&self, group: Option<u16>) -> MockResult<StatusInfo> {
        let pool: Vec<&(u16, &str)> = STATUS_CODES
            .iter()
            .filter(|(code, _)| group.map_or(true, |g| code / 100 == g))
            .collect();
        let pool = if pool.is_empty() {
            STATUS_CODES.iter().collect()
        } else {
            pool
        };
        let (code, status) = **self.sampler.pick_one(&pool)?;
        Ok(StatusInfo {
            code,
            status: status.to_string(),
        })
    }

    /// Redirect status. A given `code` is used as is.
    pub fn redirect_status(&self, code: Option<u16>) -> MockResult<StatusInfo> {
        let code = match code {
            Some(code) => code,
            None => *self.sampler.pick_one(REDIRECT_CODES)?,
        };
        Ok(StatusInfo {
            code,
            status: reason_phrase(code).to_string(),
        })
    }
}

/// Reason phrase for `code`, empty for codes outside [`STATUS_CODES`].
pub fn reason_phrase(code: u16) -> &'static str {
    STATUS_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map_or("", |(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internet::PAYLOAD_METHODS;

    fn http(seed: u32) -> Http {
        Http::new(Sampler::from_seed(Some(seed)))
    }

    #[test]
    fn test_request_shape() {
        let h = http(1);
        let request = h.request(&RequestOptions::default()).unwrap();
        assert!(request.url.starts_with("http"));
        assert!(!request.method.is_empty());
    }

    #[test]
    fn test_request_payload_flags() {
        let h = http(2);
        for _ in 0..10 {
            let forced = h
                .request(&RequestOptions {
                    payload: PayloadOptions {
                        force: true,
                        ..PayloadOptions::default()
                    },
                    ..RequestOptions::default()
                })
                .unwrap();
            assert!(forced.payload.is_some());
            assert!(PAYLOAD_METHODS.contains(&forced.method.as_str()));
            assert!(forced.headers.contains("content-type: "));

            let never = h
                .request(&RequestOptions {
                    payload: PayloadOptions {
                        no_payload: true,
                        ..PayloadOptions::default()
                    },
                    ..RequestOptions::default()
                })
                .unwrap();
            assert!(never.payload.is_none());
            assert!(NON_PAYLOAD_METHODS.contains(&never.method.as_str()));
        }
    }

    #[test]
    fn test_request_fixed_method() {
        let h = http(3);
        for _ in 0..10 {
            let get = h
                .request(&RequestOptions {
                    method: Some("GET".to_string()),
                    payload: PayloadOptions {
                        force: true,
                        ..PayloadOptions::default()
                    },
                })
                .unwrap();
            assert_eq!(get.method, "GET");
            assert!(get.payload.is_none());

            let post = h
                .request(&RequestOptions {
                    method: Some("post".to_string()),
                    payload: PayloadOptions {
                        force: true,
                        ..PayloadOptions::default()
                    },
                })
                .unwrap();
            assert_eq!(post.method, "POST");
            assert!(post.payload.is_some());
        }
    }

    #[test]
    fn test_response_status_group() {
        let h = http(4);
        for _ in 0..20 {
            let ok = h
                .response(&ResponseOptions {
                    status_group: Some(2),
                    ..ResponseOptions::default()
                })
                .unwrap();
            assert!((200..300).contains(&ok.status));
            assert!(!ok.status_text.is_empty());

            let redirect = h
                .response(&ResponseOptions {
                    status_group: Some(3),
                    ..ResponseOptions::default()
                })
                .unwrap();
            assert!((300..400).contains(&redirect.status));
        }
    }

    #[test]
    fn test_response_payload_flags() {
        let h = http(5);
        let none = h
            .response(&ResponseOptions {
                payload: PayloadOptions {
                    no_payload: true,
                    ..PayloadOptions::default()
                },
                ..ResponseOptions::default()
            })
            .unwrap();
        assert!(none.payload.is_none());

        let forced = h
            .response(&ResponseOptions {
                payload: PayloadOptions {
                    force: true,
                    ..PayloadOptions::default()
                },
                ..ResponseOptions::default()
            })
            .unwrap();
        assert!(forced.payload.is_some());
    }

    #[test]
    fn test_redirect_status() {
        let h = http(6);
        let status = h.redirect_status(None).unwrap();
        assert!(REDIRECT_CODES.contains(&status.code));
        assert!(!status.status.is_empty());

        let custom = h.redirect_status(Some(999)).unwrap();
        assert_eq!(custom.code, 999);
        assert_eq!(custom.status, "");
    }

    #[test]
    fn test_seed_reproduces_requests() {
        let mut h = http(7);
        let first = h.request(&RequestOptions::default()).unwrap();
        h.seed(Some(7));
        let second = h.request(&RequestOptions::default()).unwrap();
        // Date header values follow the wall clock, everything else the seed.
        assert_eq!(first.url, second.url);
        assert_eq!(first.method, second.method);
        assert_eq!(first.payload, second.payload);
    }
}
