//! Reservation Form Component
//!
//! Booking fields bound to the booking store. Browser-native `required`,
//! `type` and `min` checks run first; the store validates again on submit.

use leptos::prelude::*;

use crate::context::use_site;
use crate::reservation::{self, ReservationField, ReservationFormStoreFields, GUEST_OPTIONS, TIME_SLOTS};
use crate::store::{store_set_field, store_submit, use_booking_store, BookingStateStoreFields};

#[component]
pub fn ReservationFormView() -> impl IntoView {
    let store = use_booking_store();
    let (hold_minutes, large_group) = use_site()
        .with_config(|c| (c.behaviour.hold_minutes, c.behaviour.large_group_size));
    let min_date = reservation::min_date(reservation::today());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let _ = store_submit(&store, reservation::today());
    };

    view! {
        <form class="reservation-form" on:submit=on_submit>
            <div class="form-row">
                <div class="form-field">
                    <label for=ReservationField::Name.as_str()>"Full name *"</label>
                    <input
                        id=ReservationField::Name.as_str()
                        type="text"
                        name=ReservationField::Name.as_str()
                        required
                        placeholder="Your name"
                        prop:value=move || store.form().name().get()
                        on:input=move |ev| store_set_field(&store, ReservationField::Name, event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for=ReservationField::Email.as_str()>"Email address *"</label>
                    <input
                        id=ReservationField::Email.as_str()
                        type="email"
                        name=ReservationField::Email.as_str()
                        required
                        placeholder="you@example.com"
                        prop:value=move || store.form().email().get()
                        on:input=move |ev| store_set_field(&store, ReservationField::Email, event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for=ReservationField::Phone.as_str()>"Phone number"</label>
                    <input
                        id=ReservationField::Phone.as_str()
                        type="tel"
                        name=ReservationField::Phone.as_str()
                        placeholder="+31 6 12 34 56 78"
                        prop:value=move || store.form().phone().get()
                        on:input=move |ev| store_set_field(&store, ReservationField::Phone, event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for=ReservationField::Guests.as_str()>"Number of guests *"</label>
                    <select
                        id=ReservationField::Guests.as_str()
                        name=ReservationField::Guests.as_str()
                        required
                        prop:value=move || store.form().guests().get()
                        on:change=move |ev| store_set_field(&store, ReservationField::Guests, event_target_value(&ev))
                    >
                        {GUEST_OPTIONS.iter().map(|&(value, label)| view! {
                            <option
                                value=value
                                prop:selected=move || store.form().guests().with(|g| g == value)
                            >
                                {label}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for=ReservationField::Date.as_str()>"Preferred date *"</label>
                    <input
                        id=ReservationField::Date.as_str()
                        type="date"
                        name=ReservationField::Date.as_str()
                        required
                        min=min_date
                        prop:value=move || store.form().date().get()
                        on:input=move |ev| store_set_field(&store, ReservationField::Date, event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for=ReservationField::Time.as_str()>"Preferred time *"</label>
                    <select
                        id=ReservationField::Time.as_str()
                        name=ReservationField::Time.as_str()
                        required
                        prop:value=move || store.form().time().get()
                        on:change=move |ev| store_set_field(&store, ReservationField::Time, event_target_value(&ev))
                    >
                        <option
                            value=""
                            disabled
                            prop:selected=move || store.form().time().with(|t| t.is_empty())
                        >
                            "Select a time"
                        </option>
                        {TIME_SLOTS.iter().map(|&slot| view! {
                            <option
                                value=slot
                                prop:selected=move || store.form().time().with(|t| t == slot)
                            >
                                {slot}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-field">
                <label for=ReservationField::Notes.as_str()>"Special requests or notes"</label>
                <textarea
                    id=ReservationField::Notes.as_str()
                    name=ReservationField::Notes.as_str()
                    rows="4"
                    placeholder="Dietary requirements, occasion, seating preferences…"
                    prop:value=move || store.form().notes().get()
                    on:input=move |ev| store_set_field(&store, ReservationField::Notes, event_target_value(&ev))
                ></textarea>
            </div>

            {move || store.error().get().map(|msg| view! {
                <p class="form-error" role="alert">{msg}</p>
            })}

            <p class="fine-print">
                {format!(
                    "We hold reservations for {} minutes. For groups of {} or more, please contact us directly. \
                     Submitting this form sends a request — our team will confirm via email within 2 hours.",
                    hold_minutes, large_group
                )}
            </p>

            <button type="submit" class="btn-solid">"Send reservation request"</button>
        </form>
    }
}
