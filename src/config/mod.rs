//! Loading of optional configuration files.

pub mod locale;

pub use locale::load_locale;
