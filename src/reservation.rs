//! Reservation Form
//!
//! Field values, validation and confirmation copy for the booking page.
//! Nothing here leaves the browser.

use chrono::NaiveDate;
use reactive_stores::Store;
use std::fmt::{self, Write};
use thiserror::Error;

/// Bookable times, 09:00 to 19:00 in half-hour steps
pub const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30",
    "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    "18:00", "18:30", "19:00",
];

/// Guest count options (value, label)
pub const GUEST_OPTIONS: &[(&str, &str)] = &[
    ("1", "1 guest"),
    ("2", "2 guests"),
    ("3", "3 guests"),
    ("4", "4 guests"),
    ("5", "5 guests"),
    ("6", "6 guests"),
    ("7", "7 guests"),
    ("8", "8 guests"),
    ("9+", "9+ guests (contact us)"),
];

pub const DEFAULT_GUESTS: &str = "2";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_LONG_FORMAT: &str = "%A %-d %B";

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    Notes,
}

impl ReservationField {
    pub const ALL: [ReservationField; 7] = [
        ReservationField::Name,
        ReservationField::Email,
        ReservationField::Phone,
        ReservationField::Guests,
        ReservationField::Date,
        ReservationField::Time,
        ReservationField::Notes,
    ];

    /// HTML `id` and `name` of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationField::Name => "name",
            ReservationField::Email => "email",
            ReservationField::Phone => "phone",
            ReservationField::Guests => "guests",
            ReservationField::Date => "date",
            ReservationField::Time => "time",
            ReservationField::Notes => "notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ReservationField::Phone | ReservationField::Notes)
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationField::Name => "name",
            ReservationField::Email => "email address",
            ReservationField::Phone => "phone number",
            ReservationField::Guests => "number of guests",
            ReservationField::Date => "preferred date",
            ReservationField::Time => "preferred time",
            ReservationField::Notes => "notes",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Please enter your {0}.")]
    MissingField(ReservationField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose a valid date.")]
    InvalidDate,
    #[error("Please choose a date from today onwards.")]
    DateInPast,
    #[error("Please choose one of the listed times.")]
    UnknownTimeSlot,
    #[error("Please choose a number of guests.")]
    UnknownGuestCount,
}

/// Values typed into the reservation form
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            date: String::new(),
            time: String::new(),
            notes: String::new(),
        }
    }
}

impl ReservationForm {
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Guests => &self.guests,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::Notes => &self.notes,
        }
    }

    pub fn set_field(&mut self, field: ReservationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReservationField::Name => self.name = value,
            ReservationField::Email => self.email = value,
            ReservationField::Phone => self.phone = value,
            ReservationField::Guests => self.guests = value,
            ReservationField::Date => self.date = value,
            ReservationField::Time => self.time = value,
            ReservationField::Notes => self.notes = value,
        }
    }

    /// Check required fields first (in display order), then formats.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ReservationError> {
        for field in ReservationField::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(ReservationError::MissingField(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ReservationError::InvalidEmail);
        }
        if !GUEST_OPTIONS.iter().any(|(value, _)| *value == self.guests) {
            return Err(ReservationError::UnknownGuestCount);
        }
        let date = NaiveDate::parse_from_str(&self.date, DATE_INPUT_FORMAT)
            .map_err(|_| ReservationError::InvalidDate)?;
        if date < today {
            return Err(ReservationError::DateInPast);
        }
        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(ReservationError::UnknownTimeSlot);
        }
        Ok(())
    }

    /// Copy echoed back once the request is "sent"
    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            first_name: self.name.split_whitespace().next().unwrap_or_default().to_string(),
            guests: guests_label(&self.guests),
            date: NaiveDate::parse_from_str(&self.date, DATE_INPUT_FORMAT)
                .ok()
                .map(format_long_date),
            time: Some(self.time.clone()).filter(|t| !t.is_empty()),
            email: self.email.trim().to_string(),
        }
    }
}

/// Browser-level email check: one `@`, something on both sides, no spaces
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// "1 guest", "4 guests", "9+ guests"
pub fn guests_label(guests: &str) -> String {
    let count: Option<u32> = guests
        .trim_end_matches('+')
        .parse()
        .ok();
    match count {
        Some(1) if !guests.ends_with('+') => format!("{} guest", guests),
        _ => format!("{} guests", guests),
    }
}

/// "Thursday 1 May"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(DATE_LONG_FORMAT).to_string()
}

/// Value for the date input's `min` attribute
pub fn min_date(today: NaiveDate) -> String {
    today.format(DATE_INPUT_FORMAT).to_string()
}

/// Today in the visitor's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Confirmation copy for a submitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub first_name: String,
    pub guests: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub email: String,
}

impl Confirmation {
    pub fn heading(&self) -> String {
        format!("We’ll see you soon, {}.", self.first_name)
    }

    pub fn summary(&self) -> String {
        let mut text = format!("Your reservation request for {}", self.guests);
        if let Some(date) = &self.date {
            let _ = write!(text, " on {}", date);
        }
        if let Some(time) = &self.time {
            let _ = write!(text, " at {}", time);
        }
        let _ = write!(
            text,
            " has been received. A confirmation will be sent to {} within two hours.",
            self.email
        );
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today_fixed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    fn filled() -> ReservationForm {
        let mut form = ReservationForm::default();
        form.set_field(ReservationField::Name, "Anna Jansen");
        form.set_field(ReservationField::Email, "anna@example.com");
        form.set_field(ReservationField::Guests, "4");
        form.set_field(ReservationField::Date, "2025-05-01");
        form.set_field(ReservationField::Time, "18:00");
        form
    }

    #[test]
    fn test_default_form() {
        let form = ReservationForm::default();
        assert_eq!(form.guests, "2");
        for field in ReservationField::ALL.into_iter().filter(|f| *f != ReservationField::Guests) {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(filled().validate(today_fixed()), Ok(()));
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = filled();
        assert!(form.phone.is_empty() && form.notes.is_empty());
        assert!(form.validate(today_fixed()).is_ok());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in ReservationField::ALL.into_iter().filter(|f| f.is_required()) {
            let mut form = filled();
            form.set_field(field, "   ");
            assert_eq!(
                form.validate(today_fixed()),
                Err(ReservationError::MissingField(field)),
                "{} should be required",
                field.as_str()
            );
        }
    }

    #[test]
    fn test_email_format() {
        for bad in ["anna", "@example.com", "anna@", "an na@example.com", "a@b@c", "anna@.com"] {
            let mut form = filled();
            form.set_field(ReservationField::Email, bad);
            assert_eq!(form.validate(today_fixed()), Err(ReservationError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_date_minimum_is_today() {
        let mut form = filled();
        form.set_field(ReservationField::Date, "2025-04-20");
        assert!(form.validate(today_fixed()).is_ok());

        form.set_field(ReservationField::Date, "2025-04-19");
        assert_eq!(form.validate(today_fixed()), Err(ReservationError::DateInPast));

        form.set_field(ReservationField::Date, "01/05/2025");
        assert_eq!(form.validate(today_fixed()), Err(ReservationError::InvalidDate));
    }

    #[test]
    fn test_time_and_guests_must_be_listed() {
        let mut form = filled();
        form.set_field(ReservationField::Time, "23:15");
        assert_eq!(form.validate(today_fixed()), Err(ReservationError::UnknownTimeSlot));

        let mut form = filled();
        form.set_field(ReservationField::Guests, "12");
        assert_eq!(form.validate(today_fixed()), Err(ReservationError::UnknownGuestCount));
    }

    #[test]
    fn test_confirmation_for_anna() {
        let confirmation = filled().confirmation();
        assert_eq!(confirmation.first_name, "Anna");
        assert_eq!(confirmation.guests, "4 guests");
        assert_eq!(confirmation.date.as_deref(), Some("Thursday 1 May"));
        assert_eq!(confirmation.time.as_deref(), Some("18:00"));
        assert_eq!(confirmation.heading(), "We’ll see you soon, Anna.");

        let summary = confirmation.summary();
        assert!(summary.contains("4 guests on Thursday 1 May at 18:00"));
        assert!(summary.contains("anna@example.com"));
    }

    #[test]
    fn test_guests_label() {
        assert_eq!(guests_label("1"), "1 guest");
        assert_eq!(guests_label("2"), "2 guests");
        assert_eq!(guests_label("9+"), "9+ guests");
    }

    #[test]
    fn test_time_slots() {
        assert_eq!(TIME_SLOTS.len(), 21);
        assert_eq!(TIME_SLOTS.first(), Some(&"09:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"19:00"));
    }

    #[test]
    fn test_min_date_format() {
        assert_eq!(min_date(today_fixed()), "2025-04-20");
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ReservationError::MissingField(ReservationField::Email);
        assert_eq!(err.to_string(), "Please enter your email address.");
    }

    #[test]
    fn test_field_names_are_unique_html_names() {
        let names: Vec<&str> = ReservationField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "phone", "guests", "date", "time", "notes"]);
    }

    #[test]
    fn test_summary_sentence() {
        let confirmation = filled().confirmation();
        assert_eq!(
            confirmation.summary(),
            "Your reservation request for 4 guests on Thursday 1 May at 18:00 has been received. \
             A confirmation will be sent to anna@example.com within two hours."
        );

        let bare = Confirmation {
            date: None,
            time: None,
            ..confirmation
        };
        assert_eq!(
            bare.summary(),
            "Your reservation request for 4 guests has been received. \
             A confirmation will be sent to anna@example.com within two hours."
        );
    }
}
