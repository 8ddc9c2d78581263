use leptos::prelude::*;

use crate::reservation::Confirmation;
use crate::store::{store_reset, use_booking_store};

/// Shown in place of the form once a request is "sent"
#[component]
pub fn BookingConfirmation(confirmation: Confirmation) -> impl IntoView {
    let store = use_booking_store();

    view! {
        <div class="booking-confirmation">
            <div class="confirmation-bolt">
                <span>"⚡"</span>
            </div>
            <h2 class="confirmation-heading">{confirmation.heading()}</h2>
            <div class="gold-rule short"></div>
            <p class="confirmation-summary">{confirmation.summary()}</p>
            <button class="text-button" on:click=move |_| store_reset(&store)>
                "Make another reservation"
            </button>
        </div>
    }
}
