//! Length check.

use super::SectionResult;

/// Shortest password the strength evaluation accepts without a reason.
pub const RECOMMENDED_LENGTH: usize = 15;

/// Returns a reason when the password is shorter than [`RECOMMENDED_LENGTH`].
pub fn length_section(password: &str) -> SectionResult {
    let len = password.chars().count();
    (len < RECOMMENDED_LENGTH).then(|| {
        format!(
            "Password is {} characters, at least {} recommended",
            len, RECOMMENDED_LENGTH
        )
    })
}
