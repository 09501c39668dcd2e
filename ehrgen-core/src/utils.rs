//! Shared case-conversion functions for generated identifiers.
//!
//! Schema field names arrive in FHIR camelCase (e.g., "birthDate"); each
//! target language converts them to its own idiom. Conversions are pure and
//! deterministic so re-generation from identical input is byte-identical.

/// Convert a string to snake_case (e.g., "birthDate" -> "birth_date").
///
/// Runs of uppercase stay together ("PATIENT" -> "patient", "HTTPServer" ->
/// "http_server") because vendor table names are often all-caps.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase()
            && i > 0
            && (chars[i - 1].is_lowercase()
                || chars[i - 1].is_ascii_digit()
                || chars.get(i + 1).is_some_and(|next| next.is_lowercase()))
        {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Convert a string to PascalCase (e.g., "birth_date" -> "BirthDate")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "birth_date" -> "birthDate")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "birthDate" -> "birth-date")
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}
