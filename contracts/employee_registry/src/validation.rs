//! Input validation for roster writes.
//!
//! Every bound lives here as a named constant so the limits stay in
//! one place. Checks run before any storage write and surface as typed
//! errors, never panics.

use soroban_sdk::String;

use crate::types::Error;

/// Minimum length for an employee name
pub const MIN_NAME_LENGTH: u32 = 1;
/// Maximum length for an employee name
pub const MAX_NAME_LENGTH: u32 = 100;

/// Minimum length for an email address (shortest plausible mailbox)
pub const MIN_EMAIL_LENGTH: u32 = 5;
/// Maximum length for an email address
pub const MAX_EMAIL_LENGTH: u32 = 120;

/// Maximum length for department and designation labels
pub const MAX_LABEL_LENGTH: u32 = 80;

/// Grade band, inclusive
pub const MIN_GRADE: u32 = 1;
pub const MAX_GRADE: u32 = 10;

/// Performance rating scale, inclusive
pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

pub fn validate_name(name: &String) -> Result<(), Error> {
    let len = name.len();
    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return Err(Error::InvalidName);
    }
    Ok(())
}

pub fn validate_email(email: &String) -> Result<(), Error> {
    let len = email.len();
    if len < MIN_EMAIL_LENGTH || len > MAX_EMAIL_LENGTH {
        return Err(Error::InvalidEmail);
    }
    Ok(())
}

pub fn validate_employee_id(employee_id: u32) -> Result<(), Error> {
    if employee_id == 0 {
        return Err(Error::InvalidEmployeeId);
    }
    Ok(())
}

pub fn validate_grade(grade: u32) -> Result<(), Error> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(Error::InvalidGrade);
    }
    Ok(())
}

pub fn validate_rating(rating: u32) -> Result<(), Error> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::InvalidRating);
    }
    Ok(())
}

pub fn validate_department(department: &String) -> Result<(), Error> {
    let len = department.len();
    if len == 0 || len > MAX_LABEL_LENGTH {
        return Err(Error::InvalidDepartment);
    }
    Ok(())
}

pub fn validate_designation(designation: &String) -> Result<(), Error> {
    let len = designation.len();
    if len == 0 || len > MAX_LABEL_LENGTH {
        return Err(Error::InvalidDesignation);
    }
    Ok(())
}
