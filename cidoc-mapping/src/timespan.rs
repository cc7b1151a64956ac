//! `E52_Time-Span` construction from TEI dating attributes

use chrono::{Datelike, NaiveDate};
use cidoc_graph_ir::{Graph, Term};
use cidoc_tei::ElementRef;
use cidoc_vocab::crm;

use crate::emit::{add, add_type, iri};

const BEGIN_ATTRS: [&str; 3] = ["when", "from", "notBefore"];
const END_ATTRS: [&str; 2] = ["to", "notAfter"];

/// Raw begin/end values found on a dated element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub begin: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    /// Read `@when`/`@from`/`@notBefore` and `@to`/`@notAfter`. A `date`
    /// element without any of them falls back to its text.
    pub fn from_element(element: &ElementRef<'_>) -> Self {
        let pick = |names: &[&str]| {
            names
                .iter()
                .filter_map(|n| element.attr(n))
                .map(str::trim)
                .find(|v| !v.is_empty())
                .map(str::to_string)
        };
        let mut range = Self {
            begin: pick(&BEGIN_ATTRS),
            end: pick(&END_ATTRS),
        };
        if range.is_empty() && element.name() == "date" {
            let text = element.text();
            if !text.is_empty() {
                range.begin = Some(text);
            }
        }
        range
    }

    pub fn begin_only(value: &str) -> Self {
        Self {
            begin: Some(value.to_string()),
            end: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.begin.is_none() && self.end.is_none()
    }

    /// Human-readable label: the single value or `begin - end`
    pub fn display(&self) -> String {
        match (&self.begin, &self.end) {
            (Some(b), Some(e)) if b != e => format!("{b} - {e}"),
            (Some(b), _) => b.clone(),
            (None, Some(e)) => e.clone(),
            (None, None) => String::new(),
        }
    }

    /// First and last day covered, when both ends parse
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let begin_raw = self.begin.as_deref().or(self.end.as_deref())?;
        let end_raw = self.end.as_deref().unwrap_or(begin_raw);
        let (begin, _) = expand_date(begin_raw)?;
        let (_, end) = expand_date(end_raw)?;
        Some((begin, end))
    }
}

/// Expand `YYYY`, `YYYY-MM` or `YYYY-MM-DD` to its first and last day
pub fn expand_date(value: &str) -> Option<(NaiveDate, NaiveDate)> {
    let value = value.trim();
    let parts: Vec<&str> = value.split('-').collect();
    if parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    match parts.as_slice() {
        [y] if y.len() == 4 => {
            let year: i32 = y.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            ))
        }
        [y, m] if y.len() == 4 && m.len() == 2 => {
            let first = NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, 1)?;
            Some((first, last_day_of_month(first)?))
        }
        [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
            let day = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
            Some((day, day))
        }
        _ => None,
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    next.pred_opt()
}

/// A time-span attached to an event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSpan {
    pub uri: String,
    pub label: String,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Build `<{event}/time-span>` for `range` and link it with `P4_has_time-span`.
///
/// Returns `None` when the range is empty. Values that do not parse as
/// dates still produce a labelled time-span, without `P82a`/`P82b`.
pub fn time_span(graph: &mut Graph, event_uri: &str, range: &DateRange) -> Option<TimeSpan> {
    if range.is_empty() {
        return None;
    }
    let uri = format!("{event_uri}/time-span");
    let label = range.display();
    let bounds = range.bounds();
    if bounds.is_none() {
        tracing::debug!(event = %event_uri, date = %label, "undated time-span");
    }

    add(graph, event_uri, crm::P4_HAS_TIME_SPAN, iri(&uri));
    add_type(graph, &uri, crm::E52_TIME_SPAN);
    add(graph, &uri, cidoc_vocab::rdfs::LABEL, Term::string(&label));
    if let Some((begin, end)) = bounds {
        add(graph, &uri, crm::P82A_BEGIN_OF_THE_BEGIN, Term::date(begin.to_string()));
        add(graph, &uri, crm::P82B_END_OF_THE_END, Term::date(end.to_string()));
    }

    Some(TimeSpan {
        uri,
        label,
        begin: bounds.map(|(b, _)| b),
        end: bounds.map(|(_, e)| e),
    })
}
