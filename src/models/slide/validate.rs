use std::collections::HashSet;

use serde_json::Value;

use super::types::{Slide, SlideLayout};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Array,
    Object,
    String,
    Number,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::Array => value.is_array(),
            Kind::Object => value.is_object(),
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Array => "an array",
            Kind::Object => "an object",
            Kind::String => "a string",
            Kind::Number => "a number",
        }
    }
}

/// (key, kind, required) triples describing each layout's content.
fn content_fields(layout: SlideLayout) -> &'static [(&'static str, Kind, bool)] {
    match layout {
        SlideLayout::Cover => &[("tagline", Kind::String, false)],
        SlideLayout::Text => &[("items", Kind::Array, false), ("tagline", Kind::String, false)],
        SlideLayout::Bullets => &[("bullets", Kind::Array, true)],
        SlideLayout::TwoColumn => &[("left", Kind::Object, false), ("right", Kind::Object, false)],
        SlideLayout::ThreeColumn => &[("columns", Kind::Array, true)],
        SlideLayout::Timeline => &[("phases", Kind::Array, true)],
        SlideLayout::Hub => &[("core", Kind::String, false), ("spokes", Kind::Array, true)],
        SlideLayout::ImageLeft => &[
            ("image", Kind::Object, false),
            ("caption", Kind::String, false),
            ("text", Kind::Object, false),
        ],
        SlideLayout::ImageCenter => &[("image", Kind::Object, false), ("caption", Kind::String, false)],
        SlideLayout::Ring => &[("center", Kind::String, false), ("items", Kind::Array, true)],
        SlideLayout::Pyramid => &[("levels", Kind::Array, true)],
        SlideLayout::Radar => &[
            ("axes", Kind::Array, true),
            ("values", Kind::Array, true),
            ("maxValue", Kind::Number, false),
        ],
        SlideLayout::Flow => &[("steps", Kind::Array, true)],
    }
}

/// Check that a slide's content has the shape its layout expects.
/// Extra keys are allowed; only the keys the layout reads are checked.
pub fn validate_content(slide: &Slide) -> Option<String> {
    let Some(content) = slide.content.as_object() else {
        return Some(format!("Slide {} content must be a JSON object", slide.id));
    };

    for (key, kind, required) in content_fields(slide.layout) {
        match content.get(*key) {
            None | Some(Value::Null) if *required => {
                return Some(format!(
                    "Slide {}: layout '{}' requires '{}' ({})",
                    slide.id,
                    slide.layout,
                    key,
                    kind.name()
                ));
            }
            None | Some(Value::Null) => {}
            Some(value) if !kind.matches(value) => {
                return Some(format!(
                    "Slide {}: '{}' must be {} for layout '{}'",
                    slide.id,
                    key,
                    kind.name(),
                    slide.layout
                ));
            }
            Some(_) => {}
        }
    }
    None
}

/// Validate a full slide list. Returns every problem found, in slide order.
pub fn validate_slides(slides: &[Slide]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, slide) in slides.iter().enumerate() {
        if slide.id.trim().is_empty() {
            errors.push(format!("Slide {} needs an id", index + 1));
            continue;
        }
        if !seen.insert(slide.id.as_str()) {
            errors.push(format!("Duplicate slide id '{}'", slide.id));
        }
        errors.extend(validate_content(slide));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn slide(id: &str, layout: SlideLayout, content: Value) -> Slide {
        Slide {
            id: id.to_string(),
            title: String::new(),
            subtitle: None,
            layout,
            content,
            notes: None,
        }
    }

    #[test]
    fn bullets_require_bullets_array() {
        let s = slide("a", SlideLayout::Bullets, json!({}));
        assert!(validate_content(&s).unwrap().contains("requires 'bullets'"));

        let s = slide("a", SlideLayout::Bullets, json!({"bullets": "nope"}));
        assert!(validate_content(&s).unwrap().contains("must be an array"));

        let s = slide("a", SlideLayout::Bullets, json!({"bullets": []}));
        assert!(validate_content(&s).is_none());
    }

    #[test]
    fn optional_keys_may_be_missing() {
        let s = slide("c", SlideLayout::Cover, json!({}));
        assert!(validate_content(&s).is_none());
        let s = slide("c", SlideLayout::TwoColumn, json!({"left": {"bullets": []}}));
        assert!(validate_content(&s).is_none());
    }

    #[test]
    fn content_must_be_object() {
        let s = slide("x", SlideLayout::Text, json!(["a"]));
        assert!(validate_content(&s).is_some());
    }

    #[test]
    fn duplicate_and_blank_ids_reported() {
        let slides = vec![
            slide("a", SlideLayout::Cover, json!({})),
            slide("a", SlideLayout::Cover, json!({})),
            slide("  ", SlideLayout::Cover, json!({})),
        ];
        let errors = validate_slides(&slides);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Duplicate"));
        assert!(errors[1].contains("needs an id"));
    }
}
