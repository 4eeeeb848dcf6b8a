//! iCalendar, JSON and CSV renderings of resolved festivals.

use chrono::Duration;

use crate::error::FestivalError;
use crate::types::FestivalDate;

const CRLF: &str = "\r\n";
const PRODID: &str = "-//kaal//Hindu Festival Calendar//EN";
const CSV_HEADER: &str =
    "date,name,english_name,category,regions,duration_days,observance,paksha";

fn ical_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// RFC 5545 calendar of all-day events. DTEND is exclusive.
pub fn to_ical(festivals: &[FestivalDate]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];
    for f in festivals {
        let start = f.date.format("%Y%m%d");
        let end = (f.date + Duration::days(i64::from(f.rule.duration_days.max(1)))).format("%Y%m%d");
        let mut description = f.rule.description.to_string();
        if !f.rule.alternative_names.is_empty() {
            description.push_str("\nAlso known as: ");
            description.push_str(&f.rule.alternative_names.join(", "));
        }
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}-{}@kaal", slug(f.rule.name), f.date),
            format!("DTSTAMP:{start}T000000Z"),
            format!("DTSTART;VALUE=DATE:{start}"),
            format!("DTEND;VALUE=DATE:{end}"),
            format!("SUMMARY:{}", ical_escape(f.rule.english_name)),
            format!("DESCRIPTION:{}", ical_escape(&description)),
            format!(
                "CATEGORIES:{}",
                f.rule.category.as_str().to_ascii_uppercase()
            ),
            "STATUS:CONFIRMED".to_string(),
            "TRANSP:TRANSPARENT".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }
    lines.push("END:VCALENDAR".to_string());
    let mut out = lines.join(CRLF);
    out.push_str(CRLF);
    out
}

pub fn to_json(festivals: &[FestivalDate]) -> Result<String, FestivalError> {
    serde_json::to_string_pretty(festivals).map_err(|e| FestivalError::Export(e.to_string()))
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn to_csv(festivals: &[FestivalDate]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for f in festivals {
        let regions: Vec<&str> = f.rule.regions.iter().map(|r| r.as_str()).collect();
        let row = [
            f.date.to_string(),
            csv_field(f.rule.name),
            csv_field(f.rule.english_name),
            f.rule.category.as_str().to_string(),
            csv_field(&regions.join(";")),
            f.rule.duration_days.to_string(),
            f.rule.observance.as_str().to_string(),
            f.info.get("paksha").cloned().unwrap_or_default(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
