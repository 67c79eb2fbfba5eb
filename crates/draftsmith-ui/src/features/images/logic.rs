//! Image generation form parsing and upload validation.
//!
//! # Design
//! - Treat empty inputs as unset values.
//! - Reject oversized reference uploads client-side; the request is never
//!   sent.

use draftsmith_api_models::ImageJobInput;

/// Largest accepted reference upload, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 8 * 1024 * 1024;

/// Output sizes offered by the generation form.
pub const SIZE_OPTIONS: [&str; 3] = ["1024x1024", "1280x720", "720x1280"];

/// Build a validated generation payload from raw form fields.
///
/// # Errors
/// Returns a field-named message when the prompt is missing or the size label
/// is not one of the offered options.
pub fn build_image_input(
    prompt: &str,
    style: &str,
    size: &str,
    reference_url: Option<String>,
) -> Result<ImageJobInput, String> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err("prompt is required".to_string());
    }
    if !SIZE_OPTIONS.contains(&size) {
        return Err("size must be one of the offered presets".to_string());
    }
    let style = style.trim();
    Ok(ImageJobInput {
        prompt: prompt.to_string(),
        style: if style.is_empty() {
            "photo".to_string()
        } else {
            style.to_string()
        },
        size: size.to_string(),
        reference_url,
    })
}

/// Validate a reference upload's size before it is sent anywhere.
///
/// # Errors
/// Returns a message naming the cap when the file is too large.
pub fn validate_upload_size(bytes: u64) -> Result<(), String> {
    if bytes > MAX_UPLOAD_BYTES {
        return Err(format!(
            "reference image exceeds the {} MiB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_required() {
        assert!(build_image_input("", "photo", "1024x1024", None).is_err());
    }

    #[test]
    fn size_must_be_a_preset() {
        let err = build_image_input("bottle", "photo", "999x999", None).expect_err("bad size");
        assert!(err.contains("size"));
        assert!(build_image_input("bottle", "photo", "1280x720", None).is_ok());
    }

    #[test]
    fn oversized_uploads_are_rejected_before_sending() {
        assert!(validate_upload_size(MAX_UPLOAD_BYTES).is_ok());
        let err = validate_upload_size(MAX_UPLOAD_BYTES + 1).expect_err("too big");
        assert!(err.contains("8 MiB"));
    }

    #[test]
    fn style_defaults_to_photo() {
        let input = build_image_input("bottle", " ", "1024x1024", None).unwrap();
        assert_eq!(input.style, "photo");
    }
}
