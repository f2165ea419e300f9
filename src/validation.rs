use crate::errors::AppError;

pub const CREATE_REQ: &str = "both name and phone are required";
pub const UPDATE_REQ: &str = "cannot save an empty contact";

/// Trims `name` and `phone`, rejecting the pair if either is left empty.
///
/// `requirement` becomes the message of the returned `AppError::Validation`.
pub fn normalize_fields(
    name: &str,
    phone: &str,
    requirement: &str,
) -> Result<(String, String), AppError> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() || phone.is_empty() {
        return Err(AppError::Validation(requirement.to_string()));
    }

    Ok((name.to_string(), phone.to_string()))
}
