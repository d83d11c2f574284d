//! Image description retrieval with credential failover.
//!
//! The wire-level client ([`SceneXplainClient`]) turns HTTP outcomes into
//! typed [`DescribeError`](crate::error::DescribeError) kinds; the
//! [`Describer`] layers the failover policy on top: one retry with the
//! fallback credential after a rejection, and nothing else.

mod describer;
mod retry;
mod scenex;

pub use describer::{CaptionCredentials, Describer};
pub use scenex::{CaptionService, SceneXplainClient};
