pub mod booking_calendar;
pub mod booking_form;
pub mod contact_form;
pub mod navbar;
pub mod service_card;
pub mod time_slot_picker;

// Re-export commonly used types
pub use booking_calendar::BookingCalendar;
pub use booking_form::BookingForm;
pub use contact_form::ContactForm;
pub use navbar::Navbar;
pub use service_card::ServiceCard;
pub use time_slot_picker::TimeSlotPicker;
