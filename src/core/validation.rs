use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static PAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

/// Rejections of client input. The `Display` text is sent back as the 400 body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid mobile number format")]
    InvalidMobile,
    #[error("Invalid PAN number format")]
    InvalidPan,
    #[error("Manager ID not found or inactive")]
    InactiveManager,
    #[error("user_id or mob_num is required")]
    MissingSelector,
    #[error("user_ids must be a non-empty array")]
    EmptyUserIds,
    #[error("update_data must contain at least one field")]
    EmptyUpdateData,
}

/// Strips one leading `+91` or `0` and checks for a 10 digit number starting with 6-9.
pub fn normalize_mobile(mob_num: &str) -> Result<String, ValidationError> {
    let cleaned = mob_num
        .strip_prefix("+91")
        .or_else(|| mob_num.strip_prefix('0'))
        .unwrap_or(mob_num);
    if !MOBILE_REGEX.is_match(cleaned) {
        return Err(ValidationError::InvalidMobile);
    }
    Ok(cleaned.to_string())
}

pub fn normalize_pan(pan_num: &str) -> Result<String, ValidationError> {
    let upper = pan_num.to_uppercase();
    if !PAN_REGEX.is_match(&upper) {
        return Err(ValidationError::InvalidPan);
    }
    Ok(upper)
}
