//! Locale data for Hijri date display.

mod builtin;

pub use builtin::Locale;
