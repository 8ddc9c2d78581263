//! Routed Pages

mod about;
mod book;
mod landing;
mod menu;
mod not_found;

pub use about::AboutPage;
pub use book::BookPage;
pub use landing::LandingPage;
pub use menu::MenuPage;
pub use not_found::NotFoundPage;
