//! Cross-cutting request handling that wraps every dispatch.
//!
//! - [`trace`]: per-request span with method and path, and one event with
//!   the status and latency once the handler has answered.

pub(crate) mod trace;
