pub mod booking;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;

pub use booking::BookingPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
