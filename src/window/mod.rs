//! Time window handling
//!
//! This module contains the fixed-format timestamp parser used for both the
//! `--window_datetime_start` argument and each listing's posted-at value, and
//! the inclusive window filter applied to parsed listings.

mod datetime;
mod filter;

pub use datetime::{parse_custom_datetime, DATETIME_FORMAT};
pub use filter::{filter_in_window, Window};
