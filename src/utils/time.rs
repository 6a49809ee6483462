use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a `createdAt` value the way a browser `Date` would.
/// Offset-less date-times are local wall-clock time, bare dates are UTC midnight.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }
    let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local))
}

pub fn format_created_at(raw: Option<&str>) -> String {
    match raw.and_then(parse_created_at) {
        Some(dt) => format_local(&dt),
        None => INVALID_DATE.to_string(),
    }
}

// The browser knows the viewer's locale; chrono does not.
#[cfg(target_arch = "wasm32")]
fn format_local(dt: &DateTime<Local>) -> String {
    let millis = wasm_bindgen::JsValue::from_f64(dt.timestamp_millis() as f64);
    js_sys::Date::new(&millis)
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn format_local(dt: &DateTime<Local>) -> String {
    dt.format("%x, %X").to_string()
}
