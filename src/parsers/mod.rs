//! Source parsing helpers consumed by the transform engine and its tests.

pub mod jsx;

pub use jsx::{ParsedJsx, parse_jsx_source};
