//! Video script generation form parsing.

use crate::features::articles::logic::parse_optional_count;
use draftsmith_api_models::VideoScriptInput;

/// Longest accepted target runtime, in seconds.
pub const MAX_DURATION_SECS: u32 = 600;

/// Build a validated generation payload from raw form fields.
///
/// # Errors
/// Returns a field-named message when the topic or platform is missing, or
/// the duration is out of range.
pub fn build_script_input(
    topic: &str,
    platform: &str,
    duration_secs: &str,
) -> Result<VideoScriptInput, String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err("topic is required".to_string());
    }
    let platform = platform.trim();
    if platform.is_empty() {
        return Err("platform is required".to_string());
    }
    let duration_secs = parse_optional_count("duration", duration_secs)?;
    if let Some(secs) = duration_secs
        && secs > MAX_DURATION_SECS
    {
        return Err(format!("duration must be at most {MAX_DURATION_SECS} seconds"));
    }
    Ok(VideoScriptInput {
        topic: topic.to_string(),
        platform: platform.to_string(),
        duration_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_and_platform_are_required() {
        assert!(build_script_input("", "tiktok", "").is_err());
        assert!(build_script_input("Unboxing", "", "").is_err());
    }

    #[test]
    fn duration_is_optional_but_bounded() {
        assert_eq!(
            build_script_input("Unboxing", "tiktok", "")
                .unwrap()
                .duration_secs,
            None
        );
        assert_eq!(
            build_script_input("Unboxing", "tiktok", "45")
                .unwrap()
                .duration_secs,
            Some(45)
        );
        assert!(build_script_input("Unboxing", "tiktok", "601").is_err());
        assert!(build_script_input("Unboxing", "tiktok", "soon").is_err());
    }
}
