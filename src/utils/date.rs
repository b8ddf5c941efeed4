use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Storage format for scan_time (UTC text, lexicographically ordered).
pub const STORE_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a fixed UTC offset written as "+07:00" / "-03:30".
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match *s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hh, mm) = rest.split_once(':')?;
    let hh: i32 = hh.parse().ok()?;
    let mm: i32 = mm.parse().ok()?;
    if hh > 23 || mm > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hh * 3600 + mm * 60))
}

/// Today's calendar date in the configured offset.
pub fn today_in(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Midnight-to-midnight bounds of a local calendar day, as UTC instants.
pub fn day_window_utc(date: NaiveDate, offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap();
    let start = midnight
        .and_local_timezone(offset)
        .unwrap()
        .with_timezone(&Utc);
    (start, start + Duration::days(1))
}

/// Parse a user-supplied "YYYY-MM-DD HH:MM[:SS]" stamp in the given offset.
pub fn parse_local_stamp(s: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()?;
    naive
        .and_local_timezone(offset)
        .single()
        .map(|t| t.with_timezone(&Utc))
}

pub fn to_store(t: &DateTime<Utc>) -> String {
    t.format(STORE_FMT).to_string()
}

pub fn from_store(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, STORE_FMT)
        .ok()
        .map(|n| Utc.from_utc_datetime(&n))
}
