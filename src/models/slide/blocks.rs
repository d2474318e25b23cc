//! Layout-independent rendering units for the presenter page.
//!
//! Each layout's content is flattened into a short list of [`SlideBlock`]s so
//! one template can draw every layout. Content is read leniently: missing or
//! mistyped keys produce fewer blocks, never an error.

use serde_json::Value;

use super::types::{Slide, SlideLayout};

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub title: String,
    pub subtitle: Option<String>,
    pub items: Vec<ListItem>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideBlock {
    Tagline(String),
    Heading(String),
    List(Vec<ListItem>),
    Steps(Vec<ListItem>),
    Metrics(Vec<Metric>),
    Columns(Vec<Column>),
    Picture(Image, Option<String>),
    Unsupported,
}

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A `{label, description}` pair, a `{title, description}` pair, or a bare string.
fn labelled(item: &Value) -> Option<ListItem> {
    match item {
        Value::Null => None,
        Value::String(s) => Some(ListItem { label: None, text: s.clone() }),
        other => {
            let label = text(other, "label").or_else(|| text(other, "title"));
            let body = text(other, "description")
                .or_else(|| text(other, "detail"))
                .unwrap_or_default();
            if label.is_none() && body.is_empty() {
                return None;
            }
            Some(ListItem { label, text: body })
        }
    }
}

fn plain(item: &Value) -> ListItem {
    let text = match item {
        Value::String(s) => s.clone(),
        other => text(other, "text")
            .or_else(|| text(other, "label"))
            .unwrap_or_else(|| other.to_string()),
    };
    ListItem { label: None, text }
}

fn labelled_list(values: &[Value]) -> Vec<ListItem> {
    values.iter().filter_map(labelled).collect()
}

fn metrics(values: &[Value]) -> Vec<Metric> {
    values
        .iter()
        .map(|m| Metric {
            value: text(m, "value").unwrap_or_default(),
            label: text(m, "label").unwrap_or_default(),
        })
        .collect()
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n:.1}")
    }
}

fn side_column(side: Option<&Value>) -> Column {
    let Some(side) = side else {
        return Column::default();
    };
    Column {
        title: String::new(),
        subtitle: text(side, "subtitle"),
        items: labelled_list(array(side, "bullets")),
        metrics: metrics(array(side, "metrics")),
    }
}

fn picture(content: &Value, slide_title: &str) -> Option<SlideBlock> {
    let image = content.get("image")?;
    let src = text(image, "src")?;
    let alt = text(image, "alt").unwrap_or_else(|| slide_title.to_string());
    Some(SlideBlock::Picture(Image { src, alt }, text(content, "caption")))
}

fn non_empty_list(items: Vec<ListItem>) -> Option<SlideBlock> {
    (!items.is_empty()).then_some(SlideBlock::List(items))
}

/// Flatten a slide's content into presenter blocks.
pub fn slide_blocks(slide: &Slide) -> Vec<SlideBlock> {
    let c = &slide.content;
    let mut blocks = Vec::new();

    match slide.layout {
        SlideLayout::Cover => {
            blocks.extend(text(c, "tagline").map(SlideBlock::Tagline));
        }
        SlideLayout::Text => {
            blocks.extend(non_empty_list(array(c, "items").iter().map(plain).collect()));
            blocks.extend(text(c, "tagline").map(SlideBlock::Tagline));
        }
        SlideLayout::Bullets | SlideLayout::Pyramid => {
            let key = if slide.layout == SlideLayout::Bullets { "bullets" } else { "levels" };
            blocks.push(SlideBlock::List(labelled_list(array(c, key))));
        }
        SlideLayout::TwoColumn => {
            blocks.push(SlideBlock::Columns(vec![
                side_column(c.get("left")),
                side_column(c.get("right")),
            ]));
        }
        SlideLayout::ThreeColumn => {
            let columns = array(c, "columns")
                .iter()
                .map(|col| {
                    let items = if col.get("items").is_some() {
                        array(col, "items")
                    } else {
                        array(col, "bullets")
                    };
                    Column {
                        title: text(col, "title").unwrap_or_default(),
                        items: labelled_list(items),
                        ..Column::default()
                    }
                })
                .collect();
            blocks.push(SlideBlock::Columns(columns));
        }
        SlideLayout::Timeline => {
            let phases = array(c, "phases")
                .iter()
                .enumerate()
                .map(|(i, phase)| {
                    let activities = if phase.get("activities").is_some() {
                        array(phase, "activities")
                    } else {
                        array(phase, "tasks")
                    };
                    Column {
                        title: format!("{}. {}", i + 1, text(phase, "title").unwrap_or_default()),
                        subtitle: text(phase, "phase"),
                        items: activities.iter().map(plain).collect(),
                        metrics: Vec::new(),
                    }
                })
                .collect();
            blocks.push(SlideBlock::Columns(phases));
        }
        SlideLayout::Hub => {
            blocks.extend(text(c, "core").map(SlideBlock::Heading));
            blocks.push(SlideBlock::List(labelled_list(array(c, "spokes"))));
        }
        SlideLayout::Ring => {
            blocks.extend(text(c, "center").map(SlideBlock::Heading));
            blocks.push(SlideBlock::List(array(c, "items").iter().map(plain).collect()));
        }
        SlideLayout::ImageLeft => {
            blocks.extend(picture(c, &slide.title));
            if let Some(body) = c.get("text") {
                blocks.extend(text(body, "heading").map(SlideBlock::Heading));
                blocks.extend(non_empty_list(labelled_list(array(body, "bullets"))));
            }
        }
        SlideLayout::ImageCenter => {
            blocks.extend(picture(c, &slide.title));
        }
        SlideLayout::Radar => {
            let axes = array(c, "axes");
            let values: Vec<f64> = array(c, "values")
                .iter()
                .map(|v| v.as_f64().unwrap_or(0.0))
                .collect();
            let max = c
                .get("maxValue")
                .and_then(Value::as_f64)
                .filter(|m| *m > 0.0)
                .unwrap_or_else(|| {
                    let peak = values.iter().copied().fold(0.0_f64, f64::max);
                    if values.is_empty() { 1.0 } else { peak * 1.2 }
                });
            let scores = axes
                .iter()
                .enumerate()
                .map(|(i, axis)| Metric {
                    value: format!(
                        "{} / {}",
                        format_number(values.get(i).copied().unwrap_or(0.0)),
                        format_number(max)
                    ),
                    label: axis.as_str().unwrap_or_default().to_string(),
                })
                .collect();
            blocks.push(SlideBlock::Metrics(scores));
        }
        SlideLayout::Flow => {
            blocks.push(SlideBlock::Steps(labelled_list(array(c, "steps"))));
        }
    }

    if blocks.is_empty() && !matches!(slide.layout, SlideLayout::Cover | SlideLayout::Text) {
        blocks.push(SlideBlock::Unsupported);
    }
    blocks
}
