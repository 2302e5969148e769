use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::errors::StageError;
use crate::models::ScheduleRequest;

const USAGE: &str = "expected `<lead> <job-type> <date> <time>`, e.g. `john-doe inspection tomorrow 2pm`";

/// Splits command text into lead, job type, date and time tokens and resolves
/// the date and time in `tz`. Lead names cannot contain spaces; tokens past
/// the fourth are ignored.
pub fn parse_command(
    text: &str,
    requested_by: &str,
    reply_channel: &str,
    tz: Tz,
    today: NaiveDate,
) -> Result<ScheduleRequest, StageError> {
    let fail = |reason: String| StageError::Parse {
        raw: text.to_string(),
        reason,
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [lead_name, job_type, date_token, time_token, ..] = tokens[..] else {
        return Err(fail(USAGE.to_string()));
    };

    let date = parse_date(date_token, today)
        .ok_or_else(|| fail(format!("unrecognized date `{date_token}`")))?;
    let time = parse_time(time_token)
        .ok_or_else(|| fail(format!("unrecognized time `{time_token}`")))?;
    let starts_at = resolve_local(tz, date.and_time(time)).ok_or_else(|| {
        fail(format!(
            "{date_token} {time_token} does not exist in {}",
            tz.name()
        ))
    })?;

    Ok(ScheduleRequest {
        lead_name: lead_name.to_string(),
        job_type: job_type.to_string(),
        date_token: date_token.to_string(),
        time_token: time_token.to_string(),
        requested_by: requested_by.to_string(),
        reply_channel: reply_channel.to_string(),
        starts_at,
    })
}

/// Today's date as seen on a wall clock in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

fn resolve_local(tz: Tz, local: chrono::NaiveDateTime) -> Option<DateTime<Utc>> {
    // Ambiguous fall-back times take the first occurrence
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    match token.to_ascii_lowercase().as_str() {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        _ => {}
    }

    if let Ok(weekday) = token.parse::<Weekday>() {
        return Some(next_weekday(today, weekday));
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, fmt) {
            return Some(date);
        }
    }

    let (month, day) = token.split_once('/')?;
    NaiveDate::from_ymd_opt(today.year(), month.parse().ok()?, day.parse().ok()?)
}

/// The next `weekday` strictly after `today`.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let ahead = match (target - current).rem_euclid(7) {
        0 => 7,
        n => n,
    };
    today + Duration::days(ahead)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "noon" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {}
    }

    let (clock, pm) = if let Some(clock) = lower.strip_suffix("am") {
        (clock, Some(false))
    } else if let Some(clock) = lower.strip_suffix("pm") {
        (clock, Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        Some(_) => return None,
        // A bare "2" could be either half of the day
        None if pm.is_some() => (clock.parse::<u32>().ok()?, 0),
        None => return None,
    };

    let hour = match pm {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            hour % 12 + if pm { 12 } else { 0 }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
