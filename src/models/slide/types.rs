use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Layout tag of a slide. Determines the expected shape of `Slide::content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideLayout {
    // The generation prompt calls the opening slide "title".
    #[serde(alias = "title")]
    Cover,
    Text,
    Bullets,
    TwoColumn,
    ThreeColumn,
    Timeline,
    Hub,
    ImageLeft,
    ImageCenter,
    Ring,
    Pyramid,
    Radar,
    Flow,
}

impl SlideLayout {
    /// All layouts, in the order the editor offers them.
    pub const ALL: [SlideLayout; 13] = [
        SlideLayout::Cover,
        SlideLayout::Text,
        SlideLayout::Bullets,
        SlideLayout::TwoColumn,
        SlideLayout::ThreeColumn,
        SlideLayout::Timeline,
        SlideLayout::Hub,
        SlideLayout::ImageLeft,
        SlideLayout::ImageCenter,
        SlideLayout::Ring,
        SlideLayout::Pyramid,
        SlideLayout::Radar,
        SlideLayout::Flow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideLayout::Cover => "cover",
            SlideLayout::Text => "text",
            SlideLayout::Bullets => "bullets",
            SlideLayout::TwoColumn => "two-column",
            SlideLayout::ThreeColumn => "three-column",
            SlideLayout::Timeline => "timeline",
            SlideLayout::Hub => "hub",
            SlideLayout::ImageLeft => "image-left",
            SlideLayout::ImageCenter => "image-center",
            SlideLayout::Ring => "ring",
            SlideLayout::Pyramid => "pyramid",
            SlideLayout::Radar => "radar",
            SlideLayout::Flow => "flow",
        }
    }

    /// Parse a layout name as typed into a form. Accepts the `title` alias.
    pub fn parse(name: &str) -> Option<SlideLayout> {
        let name = name.trim();
        if name == "title" {
            return Some(SlideLayout::Cover);
        }
        SlideLayout::ALL.into_iter().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// A single presentation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub layout: SlideLayout,
    #[serde(default = "empty_object")]
    pub content: Value,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Slide listing entry (no content, no notes).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSummary {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub layout: SlideLayout,
}

impl From<&Slide> for SlideSummary {
    fn from(s: &Slide) -> Self {
        SlideSummary {
            id: s.id.clone(),
            title: s.title.clone(),
            subtitle: s.subtitle.clone(),
            layout: s.layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_match_serde() {
        for layout in SlideLayout::ALL {
            let json = serde_json::to_value(layout).unwrap();
            assert_eq!(json, Value::String(layout.as_str().to_string()));
        }
    }

    #[test]
    fn title_alias_reads_as_cover() {
        let layout: SlideLayout = serde_json::from_str("\"title\"").unwrap();
        assert_eq!(layout, SlideLayout::Cover);
        assert_eq!(SlideLayout::parse(" title "), Some(SlideLayout::Cover));
    }

    #[test]
    fn unknown_layout_rejected() {
        assert!(serde_json::from_str::<SlideLayout>("\"carousel\"").is_err());
        assert_eq!(SlideLayout::parse("carousel"), None);
    }

    #[test]
    fn slide_defaults() {
        let slide: Slide = serde_json::from_str(r#"{"id":"a","layout":"text"}"#).unwrap();
        assert_eq!(slide.title, "");
        assert!(slide.content.is_object());
        assert!(slide.subtitle.is_none());
    }
}
