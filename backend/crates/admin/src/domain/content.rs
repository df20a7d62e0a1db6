//! Content Record
//!
//! The fixed schema of text fields shown on the public site, and the
//! normalization rule every stored or submitted record passes through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized mapping of the fixed text fields shown on the public site.
///
/// The field set is closed: callers supplying unknown keys have them
/// dropped by construction, and every field is guaranteed non-empty
/// after [`ContentRecord::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub hero_name: String,
    pub hero_subtitle: String,
    pub hero_text: String,
    pub about_paragraph1: String,
    pub about_paragraph2: String,
    pub phone_number: String,
    pub email: String,
    pub linkedin_url: String,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self {
            hero_name: "Ariful Islam Koushik".to_string(),
            hero_subtitle: "Product Operations & Technical Operations Leader".to_string(),
            hero_text: "Building scalable systems, smooth workflows, and reliable operations."
                .to_string(),
            about_paragraph1: "I’m a Product Operations professional with 6+ years of experience \
                managing large-scale systems, logistics, and technical operations. I enjoy \
                turning complex operational problems into clear and scalable solutions."
                .to_string(),
            about_paragraph2: "I’ve launched instant delivery services, led warehouse \
                automation, managed 24/7 technical operations, and worked closely with \
                engineering teams to build practical, reliable systems."
                .to_string(),
            phone_number: "+8801622486838".to_string(),
            email: "hello@koushik.bd".to_string(),
            linkedin_url: "https://www.linkedin.com/in/ariful-islam-koushik/".to_string(),
        }
    }
}

impl ContentRecord {
    /// Normalize a partial, untrusted mapping against the fixed schema.
    ///
    /// For each schema field: take the caller's value if it is a string
    /// and non-blank after trimming, else the field default. Total and
    /// idempotent; any non-object input yields the defaults.
    pub fn normalize(raw: &Value) -> Self {
        let defaults = Self::default();
        Self {
            hero_name: field_or(raw, "heroName", defaults.hero_name),
            hero_subtitle: field_or(raw, "heroSubtitle", defaults.hero_subtitle),
            hero_text: field_or(raw, "heroText", defaults.hero_text),
            about_paragraph1: field_or(raw, "aboutParagraph1", defaults.about_paragraph1),
            about_paragraph2: field_or(raw, "aboutParagraph2", defaults.about_paragraph2),
            phone_number: field_or(raw, "phoneNumber", defaults.phone_number),
            email: field_or(raw, "email", defaults.email),
            linkedin_url: field_or(raw, "linkedinUrl", defaults.linkedin_url),
        }
    }
}

fn field_or(raw: &Value, key: &str, default: String) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_empty_object_yields_defaults() {
        assert_eq!(ContentRecord::normalize(&json!({})), ContentRecord::default());
    }

    #[test]
    fn test_normalize_non_object_yields_defaults() {
        assert_eq!(
            ContentRecord::normalize(&Value::Null),
            ContentRecord::default()
        );
        assert_eq!(
            ContentRecord::normalize(&json!("just a string")),
            ContentRecord::default()
        );
    }

    #[test]
    fn test_normalize_keeps_supplied_values_and_trims() {
        let record = ContentRecord::normalize(&json!({
            "phoneNumber": "  123  ",
            "email": "me@example.com",
        }));

        assert_eq!(record.phone_number, "123");
        assert_eq!(record.email, "me@example.com");
        assert_eq!(record.hero_name, ContentRecord::default().hero_name);
    }

    #[test]
    fn test_normalize_blank_and_non_string_values_fall_back() {
        let record = ContentRecord::normalize(&json!({
            "heroName": "   ",
            "heroSubtitle": 42,
            "heroText": null,
        }));

        let defaults = ContentRecord::default();
        assert_eq!(record.hero_name, defaults.hero_name);
        assert_eq!(record.hero_subtitle, defaults.hero_subtitle);
        assert_eq!(record.hero_text, defaults.hero_text);
    }

    #[test]
    fn test_normalize_drops_unknown_keys() {
        let record = ContentRecord::normalize(&json!({
            "heroName": "Someone",
            "injected": "value",
        }));

        let serialized = serde_json::to_value(&record).unwrap();
        assert!(serialized.get("injected").is_none());
        assert_eq!(serialized.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = ContentRecord::normalize(&json!({
            "heroName": " Someone ",
            "email": "a@b.c",
        }));
        let twice = ContentRecord::normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serializes_as_camel_case() {
        let serialized = serde_json::to_value(ContentRecord::default()).unwrap();
        for key in [
            "heroName",
            "heroSubtitle",
            "heroText",
            "aboutParagraph1",
            "aboutParagraph2",
            "phoneNumber",
            "email",
            "linkedinUrl",
        ] {
            assert!(serialized.get(key).is_some(), "missing key {key}");
        }
    }
}
