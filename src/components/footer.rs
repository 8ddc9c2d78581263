//! Footer Component
//!
//! Brand blurb, opening hours, address and site links.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::BrandMark;
use crate::context::use_site;
use crate::links;
use crate::nav::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site().config();
    let year = chrono::Local::now().year();
    let tel_href = links::tel(&config.contact.phone);
    let mail_href = links::mailto(&config.contact.email, None);

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <BrandMark class="large" />
                        <p class="footer-blurb">{config.brand.blurb.clone()}</p>
                        <div class="gold-rule short"></div>
                    </div>

                    <div class="footer-hours">
                        <h4 class="footer-heading">"Hours"</h4>
                        <ul>
                            {config.hours.iter().map(|h| view! {
                                <li class="hours-row">
                                    <span class="muted">{h.short_day.clone()}</span>
                                    <span>{h.time.clone()}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="footer-contact">
                        <h4 class="footer-heading">"Find Us"</h4>
                        <address>
                            {config.contact.address.iter().map(|line| view! {
                                {line.clone()}
                                <br />
                            }).collect_view()}
                            <br />
                            <a class="contact-link" href=tel_href>{config.contact.phone.clone()}</a>
                            <br />
                            <a class="contact-link" href=mail_href>{config.contact.email.clone()}</a>
                        </address>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="copyright">
                        {format!("© {} {}. All rights reserved.", year, config.brand.full_name)}
                    </p>
                    <nav class="footer-links">
                        {NAV_LINKS.iter().map(|link| view! {
                            <A href=link.path attr:class="footer-link">{link.label}</A>
                        }).collect_view()}
                    </nav>
                </div>
            </div>
        </footer>
    }
}
