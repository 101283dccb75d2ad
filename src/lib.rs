//! docdown: generate a Markdown API reference from JSDoc-style comments.
//!
//! Documentation comments (`/** ... */` plus the code line after them) are
//! mined into [`Entry`] values, expanded with their [`Alias`] views, grouped
//! for a table of contents and rendered into one Markdown document:
//!
//! ```no_run
//! use docdown::{generate, Options};
//!
//! let source = std::fs::read_to_string("lodash.js").unwrap();
//! let options = Options::new("lodash.js", "https://github.com/lodash/lodash/blob/main/lodash.js");
//! let markdown = generate(&source, &options).unwrap();
//! ```

pub mod alias;
pub mod anchor;
pub mod config;
pub mod entry;
pub mod error;
pub mod generator;
pub mod markdown;
pub mod member;
pub mod model;
pub mod natural;
pub mod tags;

pub use alias::Alias;
pub use config::{HashStyle, Options, TocMode};
pub use entry::Entry;
pub use error::ConfigError;
pub use generator::generate;
pub use member::DocumentedMember;
