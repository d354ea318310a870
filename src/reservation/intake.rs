use crate::reservation::models::NewReservation;
use chrono::{DateTime, Local};
use thiserror::Error;

/// Raw text as typed into the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationInput {
    pub name: String,
    pub phone: String,
    pub people: String,
    pub note: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Name is required")]
    MissingName,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Number of people is required")]
    MissingPeople,
    #[error("Number of people must be a whole number of at least 1, got '{0}'")]
    InvalidPeople(String),
}

impl ReservationInput {
    /// Checks the form fields and stamps the reservation with its creation time.
    pub fn validate(&self, time: String) -> Result<NewReservation, IntakeError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(IntakeError::MissingName);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(IntakeError::MissingPhone);
        }

        let people = self.people.trim();
        if people.is_empty() {
            return Err(IntakeError::MissingPeople);
        }
        let people = match people.parse::<u32>() {
            Ok(count) if count >= 1 => count,
            _ => return Err(IntakeError::InvalidPeople(people.to_string())),
        };

        let note = self.note.trim();
        let note = (!note.is_empty()).then(|| note.to_string());

        Ok(NewReservation::new(name.to_string(), phone.to_string(), people, note, time))
    }
}

/// Formats the creation timestamp shown on cards. Computed once per reservation.
pub fn stamp(now: DateTime<Local>, time_format: &str) -> String {
    now.format(time_format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input(name: &str, phone: &str, people: &str, note: &str) -> ReservationInput {
        ReservationInput {
            name: name.to_string(),
            phone: phone.to_string(),
            people: people.to_string(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let result = input("  Andi Wijaya ", " 0812 ", " 4 ", "  window seat ")
            .validate("now".to_string())
            .unwrap();

        assert_eq!(result.name, "Andi Wijaya");
        assert_eq!(result.phone, "0812");
        assert_eq!(result.people, 4);
        assert_eq!(result.note.as_deref(), Some("window seat"));
        assert_eq!(result.time, "now");
    }

    #[test]
    fn test_blank_note_becomes_none() {
        let result = input("Andi", "0812", "2", "   ").validate(String::new()).unwrap();
        assert_eq!(result.note, None);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            input("  ", "0812", "2", "").validate(String::new()),
            Err(IntakeError::MissingName)
        );
        assert_eq!(
            input("Andi", "", "2", "").validate(String::new()),
            Err(IntakeError::MissingPhone)
        );
        assert_eq!(
            input("Andi", "0812", " ", "").validate(String::new()),
            Err(IntakeError::MissingPeople)
        );
    }

    #[test]
    fn test_people_must_be_positive_integer() {
        for bad in ["0", "-3", "two", "2.5"] {
            assert_eq!(
                input("Andi", "0812", bad, "").validate(String::new()),
                Err(IntakeError::InvalidPeople(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_stamp_uses_format() {
        let now = Local.with_ymd_and_hms(2026, 10, 19, 18, 5, 0).unwrap();
        assert_eq!(stamp(now, "%d %b %Y, %H:%M"), "19 Oct 2026, 18:05");
        assert_eq!(stamp(now, "%H:%M"), "18:05");
    }
}
