//! mdsplit: split markdown documents into sections at a chosen heading level.
//!
//! The core is [`split()`]: it classifies each line as an ATX heading or plain
//! content (ignoring anything inside fenced code blocks) and partitions the
//! document at headings of exactly the requested level.
//!
//! ```
//! use mdsplit::{split, Title};
//!
//! let sections = split("# A\ntext1\n## B\ntext2\n## C\ntext3", 2, None, None).unwrap();
//! assert_eq!(sections.len(), 3);
//! assert_eq!(sections[0].title, Title::Untitled);
//! assert_eq!(sections[1].title, Title::Titled("B".to_string()));
//! assert_eq!((sections[2].start_line, sections[2].end_line), (5, 6));
//! ```
//!
//! - [`section`]: the `Section` output record
//! - [`formats`]: line classification rules
//! - [`filter`]: level-1 heading filters
//! - [`split`](mod@split): the splitting pass
//! - [`error`]: error types
//! - [`config`], [`encoding`], [`output`], [`demo`], [`cli`]: the command-line front end

pub mod cli;
pub mod config;
pub mod demo;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod formats;
pub mod output;
pub mod section;
pub mod split;

pub use error::{Error, SplitError};
pub use filter::HeadingFilter;
pub use section::{Section, Title};
pub use split::{split, split_with, SplitOptions};
