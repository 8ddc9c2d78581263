//! UI Components
//!
//! Shell and section components shared by the pages.

mod booking_sidebar;
mod brand_mark;
mod category_tab_bar;
mod confirmation;
mod footer;
mod marquee;
mod menu_item_grid;
mod navigation;
mod reservation_form;
mod reveal;

pub use booking_sidebar::BookingSidebar;
pub use brand_mark::BrandMark;
pub use category_tab_bar::CategoryTabBar;
pub use confirmation::BookingConfirmation;
pub use footer::Footer;
pub use marquee::Marquee;
pub use menu_item_grid::MenuItemGrid;
pub use navigation::Navigation;
pub use reservation_form::ReservationFormView;
pub use reveal::Reveal;
