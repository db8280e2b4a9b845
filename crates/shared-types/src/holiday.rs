use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A planned trip owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Holiday {
    pub id: Uuid,
    pub user_id: i64,
    pub name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// API response shape for a holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HolidayResponse {
    pub id: String,
    pub name: String,
    pub destination: String,
    /// ISO date, `YYYY-MM-DD`.
    pub start_date: String,
    /// ISO date, `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Holiday> for HolidayResponse {
    fn from(h: Holiday) -> Self {
        Self {
            id: h.id.to_string(),
            name: h.name,
            destination: h.destination,
            start_date: h.start_date.format(DATE_FORMAT).to_string(),
            end_date: h.end_date.format(DATE_FORMAT).to_string(),
            notes: h.notes,
            created_at: h.created_at.to_rfc3339(),
            updated_at: h.updated_at.to_rfc3339(),
        }
    }
}

impl HolidayResponse {
    /// Length of the trip in days, counting both the first and last day.
    /// `None` when either date does not parse.
    pub fn trip_days(&self) -> Option<i64> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        Some((end - start).num_days() + 1)
    }
}

/// Request body for creating a holiday. Updates replace every field, so the
/// same shape is used for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(
    feature = "validation",
    validate(schema(function = "validate_date_range", skip_on_field_errors = false))
)]
pub struct CreateHolidayRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 1,
            max = 120,
            message = "Destination must be between 1 and 120 characters"
        ))
    )]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 2000, message = "Notes must be at most 2000 characters"))
    )]
    pub notes: Option<String>,
}

pub type UpdateHolidayRequest = CreateHolidayRequest;

impl CreateHolidayRequest {
    /// Trim text fields and collapse blank notes to `None`.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.destination = self.destination.trim().to_string();
        self.notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }
}

#[cfg(feature = "validation")]
fn validate_date_range(req: &CreateHolidayRequest) -> Result<(), ValidationError> {
    if req.end_date < req.start_date {
        return Err(ValidationError::new("end_date")
            .with_message("End date cannot be before the start date".into()));
    }
    Ok(())
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date as used by HTML date inputs.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

// ---------------------------------------------------------------------------
// Sort selector
// ---------------------------------------------------------------------------

/// Ordering requested when listing holidays.
///
/// The wire value is what the list's sort control sends and what the server
/// function and the REST `?sort=` parameter accept. `Unsorted` (empty string)
/// means no explicit choice and lists the newest holidays first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HolidaySort {
    #[default]
    Unsorted,
    StartDate,
    Name,
    Destination,
}

/// All sort options in display order.
pub const HOLIDAY_SORTS: &[HolidaySort] = &[
    HolidaySort::Unsorted,
    HolidaySort::StartDate,
    HolidaySort::Name,
    HolidaySort::Destination,
];

impl HolidaySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidaySort::Unsorted => "",
            HolidaySort::StartDate => "date",
            HolidaySort::Name => "name",
            HolidaySort::Destination => "destination",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidaySort::Unsorted => "Recently added",
            HolidaySort::StartDate => "Start date",
            HolidaySort::Name => "Name",
            HolidaySort::Destination => "Destination",
        }
    }

    /// Strict parse of a wire value. Unknown values are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" => Some(HolidaySort::Unsorted),
            "date" => Some(HolidaySort::StartDate),
            "name" => Some(HolidaySort::Name),
            "destination" => Some(HolidaySort::Destination),
            _ => None,
        }
    }

    /// Lenient parse used for UI controls, falling back to `Unsorted`.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Client-side mirror of the server's `ORDER BY` for this selector.
    pub fn compare(&self, a: &HolidayResponse, b: &HolidayResponse) -> Ordering {
        match self {
            HolidaySort::Unsorted => b.created_at.cmp(&a.created_at),
            HolidaySort::StartDate => a
                .start_date
                .cmp(&b.start_date)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            HolidaySort::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| b.created_at.cmp(&a.created_at)),
            HolidaySort::Destination => a
                .destination
                .to_lowercase()
                .cmp(&b.destination.to_lowercase())
                .then_with(|| a.start_date.cmp(&b.start_date)),
        }
    }

    /// Stable in-place sort of `items` by this selector.
    pub fn apply(&self, items: &mut [HolidayResponse]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl std::fmt::Display for HolidaySort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
