use chrono::NaiveDate;

/// A bookable service offered by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 4] = [
    ServiceOption {
        id: "extinguisher",
        label: "Fire Extinguisher Inspection",
        description: "Annual inspection and certification of fire extinguishers",
    },
    ServiceOption {
        id: "risk",
        label: "Fire Risk Assessment",
        description: "Comprehensive evaluation of fire hazards and safety measures",
    },
    ServiceOption {
        id: "equipment",
        label: "Safety Equipment Installation",
        description: "Installation of new fire extinguishers and safety equipment",
    },
    ServiceOption {
        id: "maintenance",
        label: "Maintenance Service",
        description: "Repair and maintenance of existing fire safety equipment",
    },
];

pub const PROPERTY_TYPES: [(&str, &str); 8] = [
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("industrial", "Industrial"),
    ("institutional", "Institutional (School, Hospital, etc.)"),
    ("retail", "Retail"),
    ("restaurant", "Restaurant"),
    ("office", "Office Building"),
    ("other", "Other"),
];

/// A fixed, pre-enumerated appointment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub value: &'static str,
    pub label: &'static str,
}

pub const MORNING_SLOTS: [TimeSlot; 3] = [
    TimeSlot { value: "09:00", label: "9:00 AM" },
    TimeSlot { value: "10:00", label: "10:00 AM" },
    TimeSlot { value: "11:00", label: "11:00 AM" },
];

pub const AFTERNOON_SLOTS: [TimeSlot; 4] = [
    TimeSlot { value: "13:00", label: "1:00 PM" },
    TimeSlot { value: "14:00", label: "2:00 PM" },
    TimeSlot { value: "15:00", label: "3:00 PM" },
    TimeSlot { value: "16:00", label: "4:00 PM" },
];

pub fn all_slots() -> impl Iterator<Item = TimeSlot> {
    MORNING_SLOTS.iter().chain(AFTERNOON_SLOTS.iter()).copied()
}

pub fn is_known_service(id: &str) -> bool {
    SERVICE_OPTIONS.iter().any(|s| s.id == id)
}

pub fn is_known_property_type(id: &str) -> bool {
    PROPERTY_TYPES.iter().any(|(value, _)| *value == id)
}

pub fn is_known_slot(value: &str) -> bool {
    all_slots().any(|s| s.value == value)
}

pub fn service_label(id: &str) -> Option<&'static str> {
    SERVICE_OPTIONS.iter().find(|s| s.id == id).map(|s| s.label)
}

/// "2025-03-10" -> "Monday, March 10, 2025" for the confirmation screen.
/// Unparseable input is shown as-is.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "09:00" -> "9:00 AM" using the slot catalog.
pub fn display_time(value: &str) -> String {
    all_slots()
        .find(|s| s.value == value)
        .map(|s| s.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_catalog_is_fixed() {
        assert_eq!(all_slots().count(), 7);
        assert!(is_known_slot("09:00"));
        assert!(is_known_slot("16:00"));
        assert!(!is_known_slot("12:00"));
        assert!(!is_known_slot("9:00"));
    }

    #[test]
    fn service_and_property_lookups() {
        assert!(is_known_service("extinguisher"));
        assert!(!is_known_service("sprinklers"));
        assert!(is_known_property_type("commercial"));
        assert!(!is_known_property_type("castle"));
        assert_eq!(service_label("risk"), Some("Fire Risk Assessment"));
    }

    #[test]
    fn confirmation_display_formats() {
        assert_eq!(display_date("2025-03-10"), "Monday, March 10, 2025");
        assert_eq!(display_time("09:00"), "9:00 AM");
        assert_eq!(display_time("13:00"), "1:00 PM");
        // Fallbacks pass the raw value through.
        assert_eq!(display_date("not-a-date"), "not-a-date");
        assert_eq!(display_time("12:34"), "12:34");
    }
}
