use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Current instant from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Today's date in UTC, the same calendar the creation dates use
pub fn today_utc() -> NaiveDate {
    now_utc().date_naive()
}

pub fn current_year() -> i32 {
    now_utc().year()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_browser_clock() {
        assert_eq!(today_utc(), now_utc().date_naive());
        assert!(current_year() >= 2024);
    }
}
