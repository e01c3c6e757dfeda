use std::sync::OnceLock;

use regex::Regex;

const TITLES: &[&str] = &["dr", "doctor", "mr", "mrs", "ms", "prof"];

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}\s]+").expect("static regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Lowercases, drops punctuation and collapses whitespace.
///
/// `"I want to see Dr. Evelyn Reed!"` becomes `"i want to see dr evelyn reed"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = non_word().replace_all(&lowered, " ");
    whitespace().replace_all(stripped.trim(), " ").into_owned()
}

pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words of a person's name with honorifics removed.
pub fn name_words(name: &str) -> Vec<String> {
    words(name)
        .into_iter()
        .filter(|w| !TITLES.contains(&w.as_str()))
        .collect()
}

/// Prefix used to spot a specialty inside free text.
///
/// Drops the last three characters so the field name also matches the
/// practitioner noun: "pediatrics" matches "pediatrician", "cardiology"
/// matches "cardiologist". Never shorter than four characters.
pub fn specialty_stem(specialty: &str) -> String {
    let normalized = normalize(specialty);
    let chars: Vec<char> = normalized.chars().collect();
    let keep = chars.len().saturating_sub(3).max(4).min(chars.len());
    chars[..keep].iter().collect()
}

/// Whether already-normalized text mentions `specialty`.
///
/// The stem has to start a word, so "urology" is not found in
/// "neurologist". Specialties of four characters or fewer ("ENT") must
/// appear as whole words.
pub fn mentions_specialty(normalized_text: &str, specialty: &str) -> bool {
    let full = normalize(specialty);
    if full.is_empty() {
        return false;
    }

    let padded = format!(" {} ", normalized_text);
    if full.chars().count() <= 4 {
        return padded.contains(&format!(" {} ", full));
    }

    padded.contains(&format!(" {}", specialty_stem(specialty)))
}

pub fn contains_word(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|w| w == needle)
}

/// Trimmed character count, which is what length limits on form fields use.
pub fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("  I want to see Dr. Evelyn   Reed! "), "i want to see dr evelyn reed");
        assert_eq!(normalize("डॉक्टर, कृपया"), "डॉक्टर कृपया");
    }

    #[test]
    fn name_words_skip_titles() {
        assert_eq!(name_words("Dr. Samuel Green"), vec!["samuel", "green"]);
    }

    #[test]
    fn specialty_stem_matches_practitioner_nouns() {
        assert!(normalize("I need a pediatrician").contains(&specialty_stem("Pediatrics")));
        assert!(normalize("a cardiologist please").contains(&specialty_stem("Cardiology")));
        assert!(normalize("dermatologist").contains(&specialty_stem("Dermatology")));
        assert!(normalize("orthopedic surgeon").contains(&specialty_stem("Orthopedics")));
        assert_eq!(specialty_stem("ENT"), "ent");
    }

    #[test]
    fn specialty_must_start_a_word() {
        assert!(mentions_specialty(&normalize("I need a urologist"), "Urology"));
        assert!(!mentions_specialty(&normalize("I need a neurologist"), "Urology"));
        assert!(mentions_specialty(&normalize("my son needs a pediatric checkup"), "Pediatrics"));
        assert!(mentions_specialty(&normalize("someone in general medicine"), "General Medicine"));
    }

    #[test]
    fn short_specialty_needs_whole_word() {
        assert!(mentions_specialty(&normalize("an ENT specialist please"), "ENT"));
        assert!(!mentions_specialty(&normalize("book an appointment"), "ENT"));
        assert!(!mentions_specialty(&normalize("any treatment?"), "ENT"));
        assert!(!mentions_specialty(&normalize("book a dentist"), "ENT"));
        assert!(!mentions_specialty(&normalize("anything"), ""));
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        assert_eq!(char_len(" ab "), 2);
        assert_eq!(char_len("क्षमा"), 5);
    }
}
