//! Utility functions for formatting and display

use chrono::{Datelike, Local};

/// Footer copyright line.
pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {} {}. All rights reserved.", year, holder)
}

/// Current year on the visitor's local calendar.
pub fn current_year() -> i32 {
    Local::now().year()
}
