//! Input validation utilities
//!
//! Single point of truth for field policy: sign-up, change-password, and
//! reset-password all route through [`validate_password`], so the password
//! policy cannot drift between call sites. Validators never fail fast:
//! every violated rule is reported as its own ordered message, and the
//! composite validators scope them as `field: message` strings.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::SignUpRequest;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), Vec<String>> {
    if email.is_empty() {
        return Err(vec!["Email is required".to_string()]);
    }

    let mut errors = Vec::new();

    if email.chars().count() > 255 {
        errors.push("Email must be at most 255 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        errors.push("Invalid email format".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate password against the full complexity policy
///
/// All four character classes are required; there is no partial credit,
/// and every violated rule is reported, not just the first.
pub fn validate_password(password: &str) -> Result<(), Vec<String>> {
    if password.is_empty() {
        return Err(vec!["Password is required".to_string()]);
    }

    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long".to_string());
    }

    if password.chars().count() > 128 {
        errors.push("Password must be at most 128 characters long".to_string());
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }
    }

    if !has_upper {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lower {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        errors.push("Password must contain at least one digit".to_string());
    }

    if !has_special {
        errors.push("Password must contain at least one special character".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), Vec<String>> {
    if name.is_empty() {
        return Err(vec!["Name is required".to_string()]);
    }

    if name.chars().count() > 100 {
        return Err(vec!["Name must be at most 100 characters long".to_string()]);
    }

    Ok(())
}

/// Validate a hospital identifier
pub fn validate_hospital_id(hospital_id: &str) -> Result<(), Vec<String>> {
    if hospital_id.is_empty() {
        return Err(vec!["Hospital ID is required".to_string()]);
    }

    if hospital_id.chars().count() > 50 {
        return Err(vec!["Hospital ID must be at most 50 characters long".to_string()]);
    }

    Ok(())
}

fn push_scoped(errors: &mut Vec<String>, field: &str, result: Result<(), Vec<String>>) {
    if let Err(messages) = result {
        for message in messages {
            errors.push(format!("{field}: {message}"));
        }
    }
}

/// Validate a sign-in payload, collecting every violation
///
/// Sign-in only checks shape, not complexity: complexity is enforced when
/// the password is set, and re-checking it here would lock out accounts if
/// the policy ever tightened.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    push_scoped(&mut errors, "email", validate_email(email));

    if password.is_empty() {
        errors.push("password: Password is required".to_string());
    } else if password.chars().count() > 128 {
        errors.push("password: Password must be at most 128 characters long".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a full sign-up payload, collecting every violation
pub fn validate_sign_up(request: &SignUpRequest) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    push_scoped(&mut errors, "name", validate_name(&request.name));
    push_scoped(&mut errors, "email", validate_email(&request.email));
    push_scoped(&mut errors, "password", validate_password(&request.password));

    if let Some(id) = &request.hospital_id {
        push_scoped(&mut errors, "hospitalId", validate_hospital_id(id));
    }

    if let Some(ids) = &request.hospital_ids {
        for id in ids {
            push_scoped(&mut errors, "hospitalIds", validate_hospital_id(id));
        }
    }

    // Non-admin accounts are useless without at least one hospital, so the
    // invariant is enforced here at registration time rather than at read
    // time.
    if request.role.requires_hospital_access() && request.hospital_access().is_empty() {
        errors.push(
            "hospitalIds: At least one hospital must be assigned for this role".to_string(),
        );
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            name: "Branch Owner".to_string(),
            email: "owner@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            role: Role::BranchOwner,
            hospital_id: Some("hosp-001".to_string()),
            hospital_ids: None,
        }
    }

    #[test]
    fn accepts_well_formed_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            validate_email(&long).unwrap_err(),
            vec!["Email must be at most 255 characters long"]
        );
    }

    #[test]
    fn email_length_counts_characters_not_bytes() {
        // 243 two-byte characters plus the 12-char domain: 255 chars, 498 bytes
        let email = format!("{}@example.com", "ü".repeat(243));
        assert_eq!(email.chars().count(), 255);
        assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn password_policy_requires_all_four_classes() {
        assert!(validate_password("Str0ng!Pass").is_ok());
        assert_eq!(
            validate_password("str0ng!pass").unwrap_err(),
            vec!["Password must contain at least one uppercase letter"]
        );
        assert_eq!(
            validate_password("STR0NG!PASS").unwrap_err(),
            vec!["Password must contain at least one lowercase letter"]
        );
        assert_eq!(
            validate_password("Strong!Pass").unwrap_err(),
            vec!["Password must contain at least one digit"]
        );
        assert_eq!(
            validate_password("Str0ngPass").unwrap_err(),
            vec!["Password must contain at least one special character"]
        );
    }

    #[test]
    fn every_violated_password_rule_is_reported() {
        assert_eq!(
            validate_password("lowercaseonly").unwrap_err(),
            vec![
                "Password must contain at least one uppercase letter",
                "Password must contain at least one digit",
                "Password must contain at least one special character",
            ]
        );
        assert_eq!(
            validate_password("weak").unwrap_err(),
            vec![
                "Password must be at least 8 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one digit",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn password_policy_enforces_length_bounds() {
        assert_eq!(validate_password("").unwrap_err(), vec!["Password is required"]);
        assert!(validate_password("S0r!t").is_err());
        assert!(validate_password(&format!("Aa1!{}", "x".repeat(128))).is_err());
    }

    #[test]
    fn name_and_hospital_id_length_bounds() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
        assert!(validate_hospital_id("hosp-001").is_ok());
        assert!(validate_hospital_id("").is_err());
        assert!(validate_hospital_id(&"x".repeat(51)).is_err());
    }

    #[test]
    fn sign_in_reports_all_violations_in_order() {
        let errors = validate_sign_in("", "").unwrap_err();
        assert_eq!(
            errors,
            vec![
                "email: Email is required".to_string(),
                "password: Password is required".to_string(),
            ]
        );
    }

    #[test]
    fn sign_up_collects_every_violation_across_fields() {
        let mut request = valid_request();
        request.name = String::new();
        request.password = "lowercaseonly".to_string();
        let errors = validate_sign_up(&request).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "name: Name is required".to_string(),
                "password: Password must contain at least one uppercase letter".to_string(),
                "password: Password must contain at least one digit".to_string(),
                "password: Password must contain at least one special character".to_string(),
            ]
        );
    }

    #[test]
    fn non_admin_sign_up_requires_a_hospital() {
        let mut request = valid_request();
        request.hospital_id = None;
        let errors = validate_sign_up(&request).unwrap_err();
        assert_eq!(
            errors,
            vec!["hospitalIds: At least one hospital must be assigned for this role".to_string()]
        );

        request.role = Role::Admin;
        assert!(validate_sign_up(&request).is_ok());
    }
}
