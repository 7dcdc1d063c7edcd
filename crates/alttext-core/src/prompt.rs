//! WCAG-oriented prompt assembly.

/// Build the alt-text prompt sent alongside the image.
///
/// `context` and `previous_alt_text` are interpolated verbatim. The prompt
/// always ends with the instruction to return only the alt text.
pub fn build_prompt(context: Option<&str>, previous_alt_text: Option<&str>) -> String {
    let mut prompt = String::from("Generate concise, descriptive alt text for this image. ");
    prompt.push_str(
        "Follow WCAG guidelines: be under 125 characters, avoid starting with \"image of\" or \
         \"picture of\", focus on essential information that conveys the purpose and meaning \
         of the image. ",
    );
    prompt.push_str("Be specific and descriptive but concise. ");

    if let Some(context) = context {
        prompt.push_str(&format!("Additional context: {context}. "));
    }

    if let Some(previous) = previous_alt_text {
        prompt.push_str(&format!(
            "Previous version: \"{previous}\". Please improve this or provide a better alternative. "
        ));
    }

    prompt.push_str(RETURN_ONLY_INSTRUCTION);
    prompt
}

const RETURN_ONLY_INSTRUCTION: &str = "Return only the alt text, no additional explanation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prompt() {
        let prompt = build_prompt(None, None);
        assert!(prompt.starts_with("Generate concise, descriptive alt text"));
        assert!(prompt.contains("under 125 characters"));
        assert!(prompt.contains("\"image of\""));
        assert!(!prompt.contains("Additional context"));
        assert!(!prompt.contains("Previous version"));
        assert!(prompt.ends_with(RETURN_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_prompt_with_context_and_previous() {
        let prompt = build_prompt(Some("product page for trail shoes"), Some("A shoe"));
        assert!(prompt.contains("Additional context: product page for trail shoes. "));
        assert!(prompt.contains("Previous version: \"A shoe\". Please improve this"));
        assert!(prompt.ends_with(RETURN_ONLY_INSTRUCTION));

        let context_at = prompt.find("Additional context").unwrap();
        let previous_at = prompt.find("Previous version").unwrap();
        assert!(context_at < previous_at);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt(Some("ctx"), Some("prev"));
        let b = build_prompt(Some("ctx"), Some("prev"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_are_not_escaped() {
        let prompt = build_prompt(Some("say \"hi\"\nthen stop"), None);
        assert!(prompt.contains("say \"hi\"\nthen stop"));
    }
}
