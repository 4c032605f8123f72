//! Keyword relevance filtering
//!
//! Matches extracted body text against the configured keyword list with
//! case-insensitive whole-word semantics. An article with no matches is
//! rejected by the engine.

use regex::Regex;

/// A compiled, ordered keyword list
#[derive(Debug)]
pub struct KeywordSet {
    keywords: Vec<(String, Regex)>,
}

impl KeywordSet {
    /// Compiles each keyword into a case-insensitive whole-word pattern
    ///
    /// Keywords are escaped, so entries containing regex metacharacters
    /// match literally.
    pub fn compile(keywords: &[String]) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
            compiled.push((keyword.clone(), Regex::new(&pattern)?));
        }
        Ok(Self { keywords: compiled })
    }

    /// Returns the keywords that match the text, in configured list order
    ///
    /// Word-boundary semantics: "aipolicy" does not match the keyword "ai",
    /// while "AI policy" does.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }

    /// Number of configured keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_set(keywords: &[&str]) -> KeywordSet {
        let keywords: Vec<String> = keywords.iter().map(|s| s.to_string()).collect();
        KeywordSet::compile(&keywords).unwrap()
    }

    #[test]
    fn test_case_insensitive_whole_word() {
        let set = keyword_set(&["ai"]);
        assert_eq!(set.matches("AI policy is moving fast"), vec!["ai"]);
    }

    #[test]
    fn test_no_substring_match() {
        let set = keyword_set(&["ai"]);
        assert!(set.matches("aipolicy").is_empty());
        assert!(set.matches("brainstorm").is_empty());
    }

    #[test]
    fn test_results_in_list_order() {
        let set = keyword_set(&["regulation", "policy", "governance"]);
        let matched = set.matches("governance of policy under new regulation");
        assert_eq!(matched, vec!["regulation", "policy", "governance"]);
    }

    #[test]
    fn test_only_matched_keywords_returned() {
        let set = keyword_set(&["political", "policy", "framework"]);
        assert_eq!(set.matches("a policy statement"), vec!["policy"]);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let set = keyword_set(&["policy"]);
        assert!(set.matches("").is_empty());
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        // "a.i" must compile as a literal, not as "a<any>i"
        let set = keyword_set(&["a.i"]);
        assert!(set.matches("aqi reading").is_empty());
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let set = keyword_set(&["policy"]);
        assert_eq!(set.matches("new policy, adopted"), vec!["policy"]);
        assert_eq!(set.matches("(policy)"), vec!["policy"]);
    }
}
