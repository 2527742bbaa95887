//! Client-side input checks run before anything is sent to the backend.
//!
//! These mirror the backend's own validation for the fields users type
//! in; each function collects every violation rather than stopping at
//! the first.

/// Checks review input: rating range and a non-empty target username.
///
/// # Errors
///
/// Returns every violation found.
pub fn review(rating: i64, reviewed_user_name: &str) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    if !(0..=5).contains(&rating) {
        problems.push("rating must be between 0 and 5".to_string());
    }
    if reviewed_user_name.trim().is_empty() {
        problems.push("target username is required".to_string());
    }
    collect(problems)
}

/// Checks car input.
///
/// # Errors
///
/// Returns every violation found.
pub fn car(seats: i64, service_date: &str, make_model: &str, license_plate: &str) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    if seats < 1 {
        problems.push("seats must be at least 1".to_string());
    }
    if service_date.trim().is_empty() {
        problems.push("service date is required".to_string());
    }
    if make_model.trim().is_empty() {
        problems.push("make & model is required".to_string());
    }
    if license_plate.trim().is_empty() {
        problems.push("license plate is required".to_string());
    }
    collect(problems)
}

/// Checks route input.
///
/// # Errors
///
/// Returns every violation found.
pub fn route(start: &str, end: &str, stops: &str, occupied_seats: i64) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    if start.trim().is_empty() {
        problems.push("start is required".to_string());
    }
    if end.trim().is_empty() {
        problems.push("end is required".to_string());
    }
    if stops.trim().is_empty() {
        problems.push("stops are required".to_string());
    }
    if occupied_seats < 0 {
        problems.push("occupied seats cannot be negative".to_string());
    }
    collect(problems)
}

/// Checks ride request input.
///
/// # Errors
///
/// Returns every violation found.
pub fn ride_request(start: &str, end: &str) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    if start.trim().is_empty() {
        problems.push("start is required".to_string());
    }
    if end.trim().is_empty() {
        problems.push("end is required".to_string());
    }
    collect(problems)
}

/// Checks report input.
///
/// # Errors
///
/// Returns every violation found.
pub fn report(description: &str) -> Result<(), Vec<String>> {
    if description.trim().is_empty() {
        Err(vec!["description is required".to_string()])
    } else {
        Ok(())
    }
}

/// Checks login input: a plausible email and a minimum-length password.
///
/// # Errors
///
/// Returns every violation found.
pub fn login(email: &str, password: &str) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();
    if !plausible_email(email) {
        problems.push("invalid email".to_string());
    }
    if password.len() < 6 {
        problems.push("password must be at least 6 characters".to_string());
    }
    collect(problems)
}

/// A local part, an `@`, and a domain. The backend does the real check.
fn plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

fn collect(problems: Vec<String>) -> Result<(), Vec<String>> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_accepts_valid_input() {
        assert!(review(5, "alice").is_ok());
        assert!(review(0, "alice").is_ok());
    }

    #[test]
    fn review_collects_all_violations() {
        let problems = review(9, "  ").unwrap_err();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn car_rejects_zero_seats_and_blank_fields() {
        assert!(car(4, "2024-01-01", "VW Golf", "G-123").is_ok());
        let problems = car(0, "", "VW Golf", "G-123").unwrap_err();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn route_allows_zero_occupied_seats() {
        assert!(route("Graz", "Vienna", "none", 0).is_ok());
        assert!(route("Graz", "Vienna", "none", -1).is_err());
    }

    #[test]
    fn login_checks_email_shape_and_password_length() {
        assert!(login("alice@example.com", "secret1").is_ok());
        assert!(login("alice", "secret1").is_err());
        assert!(login("@example.com", "secret1").is_err());
        assert!(login("alice@.com", "secret1").is_err());
        assert!(login("alice@example.com", "short").is_err());
    }
}
