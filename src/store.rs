//! Booking State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the form fields.
//! Lifecycle: `Editing` --submit--> `Submitted` --reset--> `Editing`.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::BookingError;
use crate::reservation::{Confirmation, ReservationField, ReservationForm};

/// Where the booking page is in its two-state lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingPhase {
    #[default]
    Editing,
    Submitted(Confirmation),
}

/// Booking page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BookingState {
    pub form: ReservationForm,
    pub phase: BookingPhase,
    /// First validation message from the last rejected submit
    pub error: Option<String>,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, BookingPhase::Submitted(_))
    }

    /// Validate and move to `Submitted`. Nothing is sent anywhere.
    pub fn submit(&mut self, today: NaiveDate) -> Result<Confirmation, BookingError> {
        if self.is_submitted() {
            return Err(BookingError::AlreadySubmitted);
        }
        if let Err(err) = self.form.validate(today) {
            self.error = Some(err.to_string());
            return Err(err.into());
        }
        self.error = None;
        let confirmation = self.form.confirmation();
        self.phase = BookingPhase::Submitted(confirmation.clone());
        Ok(confirmation)
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Type alias for the store
pub type BookingStore = Store<BookingState>;

/// Get the booking store from context
pub fn use_booking_store() -> BookingStore {
    expect_context::<BookingStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write one form field
pub fn store_set_field(store: &BookingStore, field: ReservationField, value: String) {
    store.form().write().set_field(field, value);
    if store.error().read_untracked().is_some() {
        store.error().set(None);
    }
}

/// Submit the form held in the store.
///
/// Only `error` and `phase` are written, so a rejected submit leaves the
/// mounted form alone.
pub fn store_submit(store: &BookingStore, today: NaiveDate) -> Result<(), BookingError> {
    let mut next = store.get_untracked();
    let result = next.submit(today).map(|_| ());

    if store.error().with_untracked(|e| *e != next.error) {
        store.error().set(next.error);
    }
    match &result {
        Ok(()) => {
            store.phase().set(next.phase);
            log::info!("reservation request accepted locally");
        }
        Err(err) => log::warn!("reservation request rejected: {}", err),
    }
    result
}

/// Return to an empty form
pub fn store_reset(store: &BookingStore) {
    store.update(|state| state.reset());
    log::info!("reservation form reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookingError;
    use crate::reservation::{ReservationError, ReservationFormStoreFields, DEFAULT_GUESTS};
    use leptos::reactive::owner::Owner;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    fn anna() -> BookingState {
        let mut state = BookingState::new();
        state.form.set_field(ReservationField::Name, "Anna Jansen");
        state.form.set_field(ReservationField::Email, "anna@example.com");
        state.form.set_field(ReservationField::Phone, "+31 6 12 34 56 78");
        state.form.set_field(ReservationField::Guests, "4");
        state.form.set_field(ReservationField::Date, "2025-05-01");
        state.form.set_field(ReservationField::Time, "18:00");
        state.form.set_field(ReservationField::Notes, "Window seat please");
        state
    }

    #[test]
    fn test_starts_editing() {
        let state = BookingState::new();
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_submit_transitions_once() {
        let mut state = anna();
        let confirmation = state.submit(today()).unwrap();
        assert!(state.is_submitted());
        assert_eq!(confirmation.first_name, "Anna");
        assert_eq!(confirmation.guests, "4 guests");
        assert_eq!(confirmation.date.as_deref(), Some("Thursday 1 May"));
        assert_eq!(confirmation.time.as_deref(), Some("18:00"));

        assert_eq!(state.submit(today()), Err(BookingError::AlreadySubmitted));
        assert_eq!(state.phase, BookingPhase::Submitted(confirmation));
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut state = anna();
        state.form.set_field(ReservationField::Time, "");

        let err = state.submit(today()).unwrap_err();
        assert_eq!(
            err,
            BookingError::Invalid(ReservationError::MissingField(ReservationField::Time))
        );
        assert_eq!(state.phase, BookingPhase::Editing);
        assert_eq!(state.error.as_deref(), Some("Please enter your preferred time."));

        state.form.set_field(ReservationField::Time, "18:30");
        assert!(state.submit(today()).is_ok());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = anna();
        state.submit(today()).unwrap();
        state.reset();

        assert_eq!(state.phase, BookingPhase::Editing);
        assert_eq!(state.form, ReservationForm::default());
        assert_eq!(state.form.guests, DEFAULT_GUESTS);
        assert!(state.form.name.is_empty() && state.form.notes.is_empty());
    }

    #[test]
    fn test_submit_after_reset_works_again() {
        let mut state = anna();
        state.submit(today()).unwrap();
        state.reset();
        state.form = anna().form;
        assert!(state.submit(today()).is_ok());
    }

    #[test]
    fn test_store_submit_writes_error_and_phase_only() {
        let owner = Owner::new();
        owner.with(|| {
            let mut start = anna();
            start.form.set_field(ReservationField::Date, "");
            let store = Store::new(start);

            let err = store_submit(&store, today()).unwrap_err();
            assert!(matches!(err, BookingError::Invalid(_)));
            assert_eq!(store.phase().get_untracked(), BookingPhase::Editing);
            assert_eq!(
                store.error().get_untracked().as_deref(),
                Some("Please enter your preferred date.")
            );
            assert_eq!(store.form().name().get_untracked(), "Anna Jansen");

            store_set_field(&store, ReservationField::Date, "2025-05-01".to_string());
            assert!(store.error().get_untracked().is_none());

            assert_eq!(store_submit(&store, today()), Ok(()));
            assert!(store.get_untracked().is_submitted());
            assert_eq!(
                store_submit(&store, today()),
                Err(BookingError::AlreadySubmitted)
            );
        });
    }
}
