#![no_std]
//! # multivec
//!
//! multivec is a multi-dimensional vector stored in one flat row-major
//! buffer. Indexing with fewer indices than dimensions gives lazily
//! narrowed views which share the buffer and resolve to a single value
//! once every dimension is fixed.
//!
//! ```rust
//! use multivec::MultiVec;
//!
//! let mut cube = MultiVec::filled(0, [3, 3, 3]);
//! cube.at_mut(1).at_in_place(1).at_in_place(1).set(42);
//! assert_eq!(*cube.index(&[1, 1, 1]).resolve(), 42);
//! assert_eq!(cube.index(&[1, 1]).at(1), cube.at(1).at(1).at(1));
//! ```
//!
#![forbid(unsafe_code)]
#![forbid(rustdoc::broken_intra_doc_links)]
#![forbid(rustdoc::private_intra_doc_links)]
#![forbid(missing_docs)]
#![forbid(rustdoc::missing_crate_level_docs)]
#![forbid(rustdoc::private_doc_tests)]
#![forbid(rustdoc::invalid_codeblock_attributes)]
#![forbid(rustdoc::invalid_html_tags)]
#![forbid(rustdoc::invalid_rust_codeblocks)]
#![forbid(rustdoc::bare_urls)]
#![forbid(rustdoc::unescaped_backticks)]
#![forbid(rustdoc::redundant_explicit_links)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// See [MultiVecError](error::MultiVecError)
pub mod error;
/// See [MultiVec](multivec::MultiVec)
pub mod multivec;
/// See [Odometer](odometer::Odometer)
pub mod odometer;
/// See [Range](range::Range)
pub mod range;
/// See [View](view::View) and [ViewMut](view::ViewMut)
pub mod view;

pub use error::{MultiVecError, ViewConstraint};
pub use multivec::MultiVec;
pub use odometer::Odometer;
pub use range::Range;
pub use view::{View, ViewMut};
