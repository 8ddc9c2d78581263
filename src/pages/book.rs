//! Book Page
//!
//! Reservation form (or its confirmation) next to the info sidebar.

use leptos::prelude::*;
use leptos_meta::Title;
use reactive_stores::Store;

use crate::components::{BookingConfirmation, BookingSidebar, ReservationFormView};
use crate::store::{BookingPhase, BookingState, BookingStateStoreFields};

#[component]
pub fn BookPage() -> impl IntoView {
    // Fresh state on every visit; nothing outlives the page
    let store = Store::new(BookingState::new());
    provide_context(store);

    view! {
        <Title text="Reserve a table · BliksemCafe" />
        <div class="page book">
            <section class="book-hero">
                <div class="container">
                    <p class="eyebrow fade-up">"Reservations"</p>
                    <h1 class="page-title rise">"Reserve your table"</h1>
                    <div class="gold-rule grow"></div>
                </div>
            </section>

            <section class="section book-body">
                <div class="container book-grid">
                    <div class="book-main">
                        {move || match store.phase().get() {
                            BookingPhase::Editing => view! { <ReservationFormView /> }.into_any(),
                            BookingPhase::Submitted(confirmation) => view! {
                                <BookingConfirmation confirmation=confirmation />
                            }.into_any(),
                        }}
                    </div>
                    <BookingSidebar />
                </div>
            </section>
        </div>
    }
}
