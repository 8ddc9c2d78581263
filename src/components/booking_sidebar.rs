//! Booking Sidebar Component
//!
//! Image, opening hours, location and the large-group contact block.

use leptos::prelude::*;

use crate::components::Reveal;
use crate::context::use_site;
use crate::links;

#[component]
pub fn BookingSidebar() -> impl IntoView {
    let config = use_site().config();
    let large_group = config.behaviour.large_group_size;
    let enquiry_href = links::mailto(&config.contact.email, Some("Large group enquiry"));
    let image = config.images.book_sidebar;
    let hours = config.hours;
    let address = config.contact.address;
    let email = config.contact.email;

    view! {
        <aside class="booking-sidebar">
            <Reveal class="sidebar-image">
                <img src=image alt="A table set at BliksemCafe" loading="lazy" />
                <div class="image-fade"></div>
            </Reveal>

            <Reveal index=1 class="sidebar-info">
                <div>
                    <h3 class="sidebar-heading">"Opening hours"</h3>
                    <ul>
                        {hours.iter().map(|h| view! {
                            <li class="hours-row">
                                <span class="muted">{h.long_day.clone()}</span>
                                <span>{h.time.clone()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="hairline"></div>

                <div>
                    <h3 class="sidebar-heading">"Find us"</h3>
                    <address>
                        {address.iter().map(|line| view! {
                            {line.clone()}
                            <br />
                        }).collect_view()}
                    </address>
                </div>

                <div class="hairline"></div>

                <div>
                    <h3 class="sidebar-heading">"Large groups & private events"</h3>
                    <p class="muted">
                        {format!(
                            "For parties of {} or more, or to enquire about private hire of the café, please reach out directly.",
                            large_group
                        )}
                    </p>
                    <a class="contact-link gold" href=enquiry_href>{email}</a>
                </div>
            </Reveal>
        </aside>
    }
}
