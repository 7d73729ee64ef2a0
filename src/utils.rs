use chrono::{Datelike, Local};

/// Calendar year on the local clock, the upper bound for year filters
pub fn current_year() -> i32 {
    Local::now().year()
}
