//! Article generation form parsing.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Validate before any network call; an invalid form never leaves the
//!   client.

use draftsmith_api_models::ArticleInput;

/// Build a validated generation payload from raw form fields.
///
/// # Errors
/// Returns a field-named message when the topic is missing or the word count
/// is not a positive integer.
pub fn build_article_input(
    topic: &str,
    keywords: &str,
    tone: &str,
    word_count: &str,
) -> Result<ArticleInput, String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err("topic is required".to_string());
    }
    let word_count = parse_optional_count("word count", word_count)?;
    let tone = tone.trim();
    Ok(ArticleInput {
        topic: topic.to_string(),
        keywords: parse_keywords(keywords),
        tone: if tone.is_empty() {
            "neutral".to_string()
        } else {
            tone.to_string()
        },
        word_count,
    })
}

/// Parse comma-separated keywords, dropping blanks.
#[must_use]
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_optional_count(field: &str, value: &str) -> Result<Option<u32>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<u32>()
        .map_err(|_| format!("{field} must be a positive integer"))?;
    if parsed == 0 {
        return Err(format!("{field} must be a positive integer"));
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_required() {
        let err = build_article_input("  ", "", "", "").expect_err("blank topic");
        assert!(err.contains("topic"));
    }

    #[test]
    fn keywords_are_split_and_cleaned() {
        assert_eq!(
            parse_keywords("seo, spring , ,launch"),
            vec!["seo".to_string(), "spring".to_string(), "launch".to_string()]
        );
        assert!(parse_keywords(" ,, ").is_empty());
    }

    #[test]
    fn word_count_must_be_positive() {
        assert_eq!(parse_optional_count("word count", ""), Ok(None));
        assert_eq!(parse_optional_count("word count", " 800 "), Ok(Some(800)));
        assert!(parse_optional_count("word count", "0").is_err());
        assert!(parse_optional_count("word count", "many").is_err());
    }

    #[test]
    fn tone_defaults_to_neutral() {
        let input = build_article_input("Spring launch", "seo", "", "").unwrap();
        assert_eq!(input.tone, "neutral");
        assert_eq!(input.word_count, None);
    }
}
