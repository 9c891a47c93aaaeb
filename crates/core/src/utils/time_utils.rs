//! Date helpers for snapshot entry.

use chrono::Local;

use crate::constants::DATE_FORMAT;

/// Today's date in the snapshot date format, used as the entry-form default.
pub fn today_iso() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
