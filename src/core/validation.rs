use super::error::ValidationError;
use super::types::*;

/// Check the business details required at submission.
pub fn validate_business(business: &BusinessDetails) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if business.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "business.name",
            "business name must not be empty",
        ));
    }
    errors
}

/// Check the customer details required at submission.
pub fn validate_customer(customer: &CustomerDetails) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if customer.first_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.first_name",
            "first name must not be empty",
        ));
    }
    if customer.last_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.last_name",
            "last name must not be empty",
        ));
    }
    errors
}

/// Run all submission checks.
/// Returns all validation errors found (not just the first).
pub fn validate_submission(
    business: &BusinessDetails,
    customer: &CustomerDetails,
) -> Vec<ValidationError> {
    let mut errors = validate_business(business);
    errors.extend(validate_customer(customer));
    errors
}
