//! # Pathnest
//!
//! `pathnest` is a library for rendering a stream of absolute, slash-delimited
//! path strings — pre-sorted in depth-first lexical order — as a nested
//! bracketed tree, emitting output incrementally instead of materializing the
//! tree in memory.
//!
//! Only the immediately previous path is retained between steps: the common
//! ancestor of each consecutive pair ([`common_ancestor`]) decides how many
//! tree levels to close and how many to open. The blocking API is [`render`]
//! (any `BufRead` in, any `Write` out); [`render_to_string`] covers in-memory
//! sequences, and [`TreeEmitter`] exposes the underlying state machine for
//! callers that push paths one at a time.
//!
//! Input order is trusted completely and never validated: unsorted or
//! malformed input yields structurally nonsensical but well-formed output,
//! never a panic. The only failure surface is sink I/O.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use pathnest::render_to_string;
//!
//! let tree = render_to_string(["/", "/foo", "/foo/bar"]).expect("write to a Vec cannot fail");
//! assert_eq!(tree, "\
//! [/, name=/
//!   [foo, name=/foo
//!     [bar, name=/foo/bar]
//!   ]
//! ]
//! ");
//! ```

mod emitter;
mod engine;
mod error;
mod prefix;
mod types;

pub use emitter::TreeEmitter;
pub use engine::{render, render_to_string};
pub use error::RenderError;
pub use prefix::common_ancestor;
pub use types::RenderSummary;
