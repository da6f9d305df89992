//! Event validation and normalization.
//!
//! `prepare_event` is a pure function: raw submitted fields in, canonical
//! record or the first validation error out. Persistence (and slug
//! uniqueness, which only storage can decide) is the caller's job.

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use super::errors::EventError;
use super::models::EventMode;

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
}

/// Raw event fields as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    /// Derived from the title when empty
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub organizer: String,
    pub agenda: Vec<String>,
    pub tags: Vec<String>,
}

/// A validated, normalized event ready for insertion.
#[derive(Debug, Clone)]
pub struct CanonicalEvent {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub organizer: String,
    pub agenda: Vec<String>,
    pub tags: Vec<String>,
}

/// Derive a URL-safe slug from a title: lower-case, every run of
/// characters outside [a-z0-9] becomes a single hyphen, leading/trailing
/// hyphens trimmed. Deterministic.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Parse a calendar date from the accepted input forms.
///
/// Accepts ISO `YYYY-MM-DD`, RFC 3339 date-times (time-of-day and offset
/// discarded), `MM/DD/YYYY`, and long forms like `March 5, 2025`.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%m/%d/%Y", "%B %d, %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}

/// Validate and normalize raw event fields into a canonical record.
///
/// Field completeness is checked in a fixed order, reporting the first
/// offender. A title of only punctuation derives an empty slug, which is
/// rejected as a missing slug rather than persisted as an empty key.
pub fn prepare_event(draft: EventDraft) -> Result<CanonicalEvent, EventError> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(EventError::MissingField("title"));
    }

    let mut slug = draft.slug.trim().to_string();
    if slug.is_empty() {
        slug = derive_slug(&title);
    }
    if slug.is_empty() {
        return Err(EventError::MissingField("slug"));
    }

    let description = required(&draft.description, "description")?;
    let overview = required(&draft.overview, "overview")?;
    let image = required(&draft.image, "image")?;
    let venue = required(&draft.venue, "venue")?;
    let location = required(&draft.location, "location")?;
    let raw_date = required(&draft.date, "date")?;
    let raw_time = required(&draft.time, "time")?;
    let raw_mode = required(&draft.mode, "mode")?;
    let audience = required(&draft.audience, "audience")?;
    let organizer = required(&draft.organizer, "organizer")?;

    if draft.agenda.is_empty() {
        return Err(EventError::MissingField("agenda"));
    }
    if draft.tags.is_empty() {
        return Err(EventError::MissingField("tags"));
    }

    let date =
        parse_calendar_date(&raw_date).ok_or_else(|| EventError::InvalidDate(raw_date.clone()))?;

    if !TIME_RE.is_match(&raw_time) {
        return Err(EventError::InvalidTime(raw_time));
    }

    let mode = EventMode::from_str(&raw_mode.to_lowercase())
        .map_err(|_| EventError::InvalidMode(raw_mode))?;

    Ok(CanonicalEvent {
        title,
        slug,
        description,
        overview,
        image,
        venue,
        location,
        date,
        time: raw_time,
        mode: mode.to_string(),
        audience,
        organizer,
        agenda: draft.agenda,
        tags: draft.tags,
    })
}

fn required(value: &str, name: &'static str) -> Result<String, EventError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventError::MissingField(name));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: "Rust Nation 2025".to_string(),
            slug: String::new(),
            description: "Two days of Rust talks".to_string(),
            overview: "The UK's Rust conference".to_string(),
            image: "https://img.example.com/rust-nation.png".to_string(),
            venue: "The Brewery".to_string(),
            location: "London, UK".to_string(),
            date: "2025-02-19".to_string(),
            time: "09:00".to_string(),
            mode: "offline".to_string(),
            audience: "Rust developers".to_string(),
            organizer: "Rust Nation".to_string(),
            agenda: vec!["Keynote".to_string(), "Workshops".to_string()],
            tags: vec!["rust".to_string(), "conference".to_string()],
        }
    }

    #[test]
    fn test_slug_derivation_is_deterministic() {
        let first = derive_slug("Next.js Conf 2025");
        let second = derive_slug("Next.js Conf 2025");
        assert_eq!(first, second);
        assert_eq!(first, "next-js-conf-2025");
    }

    #[test]
    fn test_slug_collapses_runs_and_trims_hyphens() {
        assert_eq!(derive_slug("  AI & ML -- Summit!  "), "ai-ml-summit");
        assert_eq!(derive_slug("DevOps Days"), "devops-days");
    }

    #[test]
    fn test_punctuation_only_title_fails_as_missing_slug() {
        assert_eq!(derive_slug("!!!"), "");

        let draft = EventDraft {
            title: "!!!".to_string(),
            ..valid_draft()
        };
        match prepare_event(draft) {
            Err(EventError::MissingField("slug")) => {}
            other => panic!("expected MissingField(slug), got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_slug_wins_over_derivation() {
        let draft = EventDraft {
            slug: "custom-slug".to_string(),
            ..valid_draft()
        };
        let canonical = prepare_event(draft).unwrap();
        assert_eq!(canonical.slug, "custom-slug");
    }

    #[test]
    fn test_invalid_date_rejected() {
        let draft = EventDraft {
            date: "2025-13-45".to_string(),
            ..valid_draft()
        };
        match prepare_event(draft) {
            Err(EventError::InvalidDate(raw)) => assert_eq!(raw, "2025-13-45"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_date_normalizes_to_iso() {
        for input in ["2025-03-05", "03/05/2025", "March 5, 2025", "2025-03-05T18:30:00Z"] {
            let draft = EventDraft {
                date: input.to_string(),
                ..valid_draft()
            };
            let canonical = prepare_event(draft).unwrap();
            assert_eq!(canonical.date.to_string(), "2025-03-05", "input: {input}");
        }
    }

    #[test]
    fn test_invalid_time_rejected() {
        let draft = EventDraft {
            time: "25:61".to_string(),
            ..valid_draft()
        };
        match prepare_event(draft) {
            Err(EventError::InvalidTime(raw)) => assert_eq!(raw, "25:61"),
            other => panic!("expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_time_passes_through_unchanged() {
        let canonical = prepare_event(valid_draft()).unwrap();
        assert_eq!(canonical.time, "09:00");
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let draft = EventDraft {
            mode: "in-person".to_string(),
            ..valid_draft()
        };
        assert!(matches!(
            prepare_event(draft),
            Err(EventError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_missing_fields_reported_in_fixed_order() {
        // Both description and venue are blank; description comes first
        let draft = EventDraft {
            description: "  ".to_string(),
            venue: String::new(),
            ..valid_draft()
        };
        match prepare_event(draft) {
            Err(EventError::MissingField("description")) => {}
            other => panic!("expected MissingField(description), got {:?}", other),
        }
    }

    #[test]
    fn test_empty_agenda_and_tags_rejected() {
        let draft = EventDraft {
            agenda: vec![],
            ..valid_draft()
        };
        assert!(matches!(
            prepare_event(draft),
            Err(EventError::MissingField("agenda"))
        ));

        let draft = EventDraft {
            tags: vec![],
            ..valid_draft()
        };
        assert!(matches!(
            prepare_event(draft),
            Err(EventError::MissingField("tags"))
        ));
    }

    #[test]
    fn test_scalars_are_trimmed() {
        let draft = EventDraft {
            venue: "  The Brewery  ".to_string(),
            ..valid_draft()
        };
        let canonical = prepare_event(draft).unwrap();
        assert_eq!(canonical.venue, "The Brewery");
    }
}
