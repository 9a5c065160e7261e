//! Attendance statuses and the calendar aggregation rules.
//!
//! The month view shows a single status per day. A day-wide holiday marker
//! (a row with no student and status `H`) wins outright; otherwise the day
//! shows the most frequent per-student status. Ties resolve by the fixed
//! priority order of [`AttendanceStatus::ALL`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::error::CoreError;
use crate::types::{Date, DbId};

/// Display code for a day or student with no attendance mark.
pub const UNMARKED: &str = "-";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// A single attendance mark. Stored in the database as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[serde(rename = "L")]
    Leave,
    #[serde(rename = "H")]
    Holiday,
}

impl AttendanceStatus {
    /// Every status, in tie-break priority order (highest first).
    pub const ALL: [Self; 4] = [Self::Present, Self::Absent, Self::Leave, Self::Holiday];

    /// One-letter code as stored in the `attendance.status` column.
    pub fn code(self) -> &'static str {
        match self {
            Self::Present => "P",
            Self::Absent => "A",
            Self::Leave => "L",
            Self::Holiday => "H",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Leave => "Leave",
            Self::Holiday => "Holiday",
        }
    }

    /// Parse a stored status code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "P" => Some(Self::Present),
            "A" => Some(Self::Absent),
            "L" => Some(Self::Leave),
            "H" => Some(Self::Holiday),
            _ => None,
        }
    }

    /// Position in [`Self::ALL`]; lower wins ties.
    fn rank(self) -> usize {
        match self {
            Self::Present => 0,
            Self::Absent => 1,
            Self::Leave => 2,
            Self::Holiday => 3,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AttendanceStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid attendance status '{s}': expected one of P, A, L, H"
            ))
        })
    }
}

/// Render an optional status the way the calendar does (`-` when unmarked).
pub fn display_code(status: Option<AttendanceStatus>) -> &'static str {
    status.map_or(UNMARKED, AttendanceStatus::code)
}

// ---------------------------------------------------------------------------
// Row abstraction
// ---------------------------------------------------------------------------

/// The parts of an attendance row the aggregation rules look at.
///
/// Implemented by the database model so the rules stay free of I/O.
pub trait AttendanceRow {
    /// `None` for a day-wide holiday marker.
    fn student_id(&self) -> Option<DbId>;
    fn date(&self) -> Date;
    /// Raw status code as stored; may be malformed in legacy data.
    fn status_code(&self) -> &str;

    /// Whether this row is a day-wide holiday marker.
    fn is_holiday_marker(&self) -> bool {
        self.student_id().is_none()
            && AttendanceStatus::parse(self.status_code()) == Some(AttendanceStatus::Holiday)
    }
}

// ---------------------------------------------------------------------------
// Month aggregation
// ---------------------------------------------------------------------------

/// One display status per marked day. Days without a key are unmarked.
pub type MonthAttendance = BTreeMap<Date, AttendanceStatus>;

/// Collapse a month's attendance rows into one display status per day.
///
/// Rows dated outside `month` are skipped, as are rows with unrecognised
/// status codes and student-less rows that are not holidays.
pub fn aggregate_month<R: AttendanceRow>(rows: &[R], month: YearMonth) -> MonthAttendance {
    let mut result = MonthAttendance::new();
    let mut tallies: BTreeMap<Date, [u32; 4]> = BTreeMap::new();

    for row in rows.iter().filter(|r| month.contains(r.date())) {
        let Some(status) = AttendanceStatus::parse(row.status_code()) else {
            continue;
        };
        match row.student_id() {
            None if status == AttendanceStatus::Holiday => {
                result.insert(row.date(), AttendanceStatus::Holiday);
            }
            None => {}
            Some(_) => {
                tallies.entry(row.date()).or_default()[status.rank()] += 1;
            }
        }
    }

    for (date, counts) in tallies {
        if result.contains_key(&date) {
            continue;
        }
        if let Some(status) = dominant_status(&counts) {
            result.insert(date, status);
        }
    }

    result
}

/// The status with the highest count; earlier entries of
/// [`AttendanceStatus::ALL`] win ties. `None` when every count is zero.
fn dominant_status(counts: &[u32; 4]) -> Option<AttendanceStatus> {
    let mut best: Option<(AttendanceStatus, u32)> = None;
    for status in AttendanceStatus::ALL {
        let count = counts[status.rank()];
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((status, count)),
        }
    }
    best.map(|(status, _)| status)
}

// ---------------------------------------------------------------------------
// Day detail
// ---------------------------------------------------------------------------

/// Per-student marks for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAttendance {
    /// Whether a day-wide holiday marker exists for the day.
    pub holiday: bool,
    statuses: HashMap<DbId, AttendanceStatus>,
}

impl DayAttendance {
    /// The student's own mark, if any.
    pub fn status_of(&self, student_id: DbId) -> Option<AttendanceStatus> {
        self.statuses.get(&student_id).copied()
    }

    /// The student's mark as a display code (`-` when unmarked).
    pub fn display_for(&self, student_id: DbId) -> &'static str {
        display_code(self.status_of(student_id))
    }

    /// Number of students with a recognised mark.
    pub fn marked_count(&self) -> usize {
        self.statuses.len()
    }
}

/// Resolve each student's mark on `date` from that day's rows.
///
/// Rows for other dates are ignored. If legacy data holds several rows for
/// one student, the first recognised one is kept.
pub fn resolve_day<R: AttendanceRow>(rows: &[R], date: Date) -> DayAttendance {
    let mut day = DayAttendance::default();
    for row in rows.iter().filter(|r| r.date() == date) {
        if row.is_holiday_marker() {
            day.holiday = true;
            continue;
        }
        let (Some(student_id), Some(status)) =
            (row.student_id(), AttendanceStatus::parse(row.status_code()))
        else {
            continue;
        };
        day.statuses.entry(student_id).or_insert(status);
    }
    day
}
