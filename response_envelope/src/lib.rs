//! A uniform response envelope for API payloads.
//!
//! [`Envelope`] wraps a payload with success/status information and a
//! `results` block describing the visible window: item count, display limit,
//! page metadata and descriptors for the neighbouring pages. The window is
//! recomputed from scratch by every configuration call, so the calls can be
//! chained in any order.
//!
//! ```
//! use response_envelope::{Envelope, EnvelopeOptions};
//!
//! let mut envelope = Envelope::new(
//!     (1..=10).collect::<Vec<i64>>(),
//!     true,
//!     200,
//!     EnvelopeOptions::default().with_paginate(true),
//! );
//! envelope
//!     .set_display_limit(3)?
//!     .set_page(2, "/items?page=??")?;
//!
//! assert_eq!(envelope.data().as_slice(), Some(&[4, 5, 6][..]));
//! assert_eq!(envelope.results().pagination.total_pages, 4);
//! # Ok::<(), response_envelope::Error>(())
//! ```

mod envelope;
mod errors;
mod options;
pub mod types;
mod window;
pub use self::envelope::Envelope;
pub use self::errors::Error;
pub use self::options::EnvelopeOptions;
pub use self::types::{DisplayLimit, ErrorBody, PageLink, Pagination, Payload, Results};
pub use self::window::{compute, PAGE_PLACEHOLDER};
