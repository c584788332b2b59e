//! Forwarding module
//!
//! Extracted records are POSTed one at a time to the forwarding endpoint.
//! Every send is preceded by a randomized pause so the receiving endpoint is
//! not hit in bursts.

mod http;
mod pause;
mod traits;

pub use http::HttpForwarder;
pub use pause::RandomPause;
pub use traits::{ForwardResponse, Forwarder, Pause};
