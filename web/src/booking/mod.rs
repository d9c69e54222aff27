//! The booking core: calendar layout, the multi-step wizard state machine,
//! field validation, and the fixed service/slot catalogs. Everything here
//! is pure and compiles on both sides of the app.

pub mod calendar;
pub mod slots;
pub mod validate;
pub mod wizard;

pub use calendar::{CalendarDay, MonthView};
pub use validate::FieldError;
pub use wizard::{BookingDraft, BookingWizard, WizardNotice, WizardStep};
