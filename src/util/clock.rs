//! Wall-clock access.
//!
//! In the browser the local time comes from `js_sys::Date` (the `time` crate
//! cannot read the clock on `wasm32-unknown-unknown`). Native builds use UTC.

use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Current local date and time without an offset.
pub fn now_local() -> PrimitiveDateTime {
    #[cfg(feature = "csr")]
    {
        let js_now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation)]
        let local_secs = (js_now.get_time() / 1000.0) as i64 - (js_now.get_timezone_offset() * 60.0) as i64;
        let local = OffsetDateTime::from_unix_timestamp(local_secs).unwrap_or(OffsetDateTime::UNIX_EPOCH);
        PrimitiveDateTime::new(local.date(), local.time())
    }
    #[cfg(not(feature = "csr"))]
    {
        let now = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

pub fn today() -> Date {
    now_local().date()
}
