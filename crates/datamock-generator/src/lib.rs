//! Locale-aware fake data for datamock.
//!
//! This crate provides the consumers that turn sampling primitives into
//! realistic values (names, emails, lorem text, HTTP messages, HAR metadata,
//! SVG images) and the [`DataMock`] facade that wires them to one engine.
//!
//! # Architecture
//!
//! ```text
//!                 Locale (built-in English or YAML)
//!                           │
//!                           ▼
//!              ┌──────────────────────────┐
//!              │        DataMock          │
//!              │                          │
//!              │  - SeedRegistry          │
//!              │  - Sampler (MT19937)     │
//!              │  - person, internet, ... │
//!              └──────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use datamock_generator::{DataMock, DataMockInit};
//! use datamock_generator::internet::EmailOptions;
//!
//! let mock = DataMock::new(DataMockInit { seed: Some(42), ..Default::default() });
//! let email = mock.internet().email(&EmailOptions::default()).unwrap();
//! assert!(email.contains('@'));
//! ```

pub mod error;
pub mod har;
pub mod http;
pub mod internet;
pub mod locale;
pub mod lorem;
pub mod mock;
pub mod person;
pub mod software;
pub mod svg;
pub mod time;
pub mod utils;
pub mod word;

// Re-exports for convenience
pub use error::{MockError, MockResult};
pub use har::Har;
pub use http::{HeaderKind, Http};
pub use internet::Internet;
pub use locale::{Locale, LocaleError};
pub use lorem::Lorem;
pub use mock::{DataMock, DataMockInit};
pub use person::{Gender, Person};
pub use software::Software;
pub use svg::Svg;
pub use time::Time;
pub use word::Word;
