use crate::{RelayError, Result};
use chrono::{Duration, NaiveDateTime};

/// A closed time range `[start, end]` used to select listings by posting time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First instant included in the window
    pub start: NaiveDateTime,

    /// Last instant included in the window
    pub end: NaiveDateTime,
}

impl Window {
    /// Creates a window starting at `start` and spanning `length_hours`
    ///
    /// A negative length yields a window whose end precedes its start; such
    /// a window contains nothing.
    ///
    /// # Returns
    ///
    /// * `Ok(Window)` - The window
    /// * `Err(RelayError::Validation)` - The end falls outside the representable range
    pub fn new(start: NaiveDateTime, length_hours: i64) -> Result<Self> {
        let end = Duration::try_hours(length_hours)
            .and_then(|length| start.checked_add_signed(length))
            .ok_or_else(|| {
                RelayError::Validation(format!(
                    "window_length_hours {} is out of range for start {}",
                    length_hours, start
                ))
            })?;

        Ok(Self { start, end })
    }

    /// Returns true if `dt` lies within the window, both ends included
    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        self.start <= dt && dt <= self.end
    }
}

/// Keeps the items whose timestamp lies within the window
///
/// Relative order is preserved. The first timestamp that cannot be read
/// aborts the whole filter with that error.
///
/// # Arguments
///
/// * `items` - The items to filter, in page order
/// * `window` - The inclusive time window
/// * `posted_at` - Reads the timestamp of one item
pub fn filter_in_window<T, F>(
    items: impl IntoIterator<Item = T>,
    window: &Window,
    posted_at: F,
) -> Result<Vec<T>>
where
    F: Fn(&T) -> Result<NaiveDateTime>,
{
    let mut kept = Vec::new();

    for item in items {
        if window.contains(posted_at(&item)?) {
            kept.push(item);
        }
    }

    Ok(kept)
}
