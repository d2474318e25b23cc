//! Templated deck used when no LLM is configured.
//!
//! Output depends only on the prompt, title and subtitle.

use serde_json::{Value, json};

use crate::models::deck::NewDeck;
use crate::models::slide::{Slide, SlideLayout};

use super::GenerateOptions;

const DEFAULT_TOPIC: &str = "AI Strategy";
const DEFAULT_BASE_ID: &str = "generated-deck";
const MAX_BASE_ID_LEN: usize = 60;

/// `[title, subtitle, prompt]` joined with " - ", or the default topic.
pub fn topic(prompt: &str, options: &GenerateOptions) -> String {
    let parts: Vec<&str> = [options.title.as_deref(), options.subtitle.as_deref(), Some(prompt)]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
    let context = parts.join(" - ");
    let context = context.trim();
    if context.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        context.to_string()
    }
}

/// Lowercase, keep `[a-z0-9]`, whitespace and `-`, collapse whitespace runs
/// into `-`, cut to 60 characters.
pub fn slug(topic: &str) -> String {
    let kept: String = topic
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }

    let slug: String = slug.chars().take(MAX_BASE_ID_LEN).collect();
    if slug.is_empty() { DEFAULT_BASE_ID.to_string() } else { slug }
}

fn slide(
    id: String,
    title: impl Into<String>,
    subtitle: Option<&str>,
    layout: SlideLayout,
    content: Value,
    notes: impl Into<String>,
) -> Slide {
    Slide {
        id,
        title: title.into(),
        subtitle: subtitle.map(str::to_string),
        layout,
        content,
        notes: Some(notes.into()),
    }
}

fn pair(label: &str, description: &str) -> Value {
    json!({ "label": label, "description": description })
}

/// Build the six-slide template deck for a prompt.
pub fn template_deck(prompt: &str, options: &GenerateOptions) -> NewDeck {
    let topic = topic(prompt, options);
    let base = slug(&topic);

    let slides = vec![
        slide(
            format!("{base}-overview"),
            format!("{topic} Overview"),
            Some("Executive Summary"),
            SlideLayout::Cover,
            json!({ "tagline": "Auto-generated demo deck" }),
            format!("Set the stage for {topic} and highlight the opportunity."),
        ),
        slide(
            format!("{base}-challenges"),
            "Key Challenges Today",
            None,
            SlideLayout::Bullets,
            json!({ "bullets": [
                pair("Fragmented Processes", "Teams rely on manual workarounds that do not scale."),
                pair("Visibility Gaps", "Leaders lack real-time insight into core metrics."),
                pair("Customer Expectations", "Modern buyers demand personalization and speed.")
            ]}),
            "Confirm these resonate with the audience and invite input.",
        ),
        slide(
            format!("{base}-solution"),
            "Solution Blueprint",
            None,
            SlideLayout::TwoColumn,
            json!({
                "left": {
                    "subtitle": "Capabilities",
                    "bullets": [
                        pair("Automation", "Streamline repetitive workflows end-to-end."),
                        pair("Intelligence", "Surface predictions and recommendations in context."),
                        pair("Integration", "Connect existing tools with minimal change management.")
                    ]
                },
                "right": {
                    "metrics": [
                        { "value": "65%", "label": "Cycle time reduction" },
                        { "value": "40%", "label": "Service cost savings" }
                    ]
                }
            }),
            "Walk through the experience and show how it maps to their goals.",
        ),
        slide(
            format!("{base}-workstreams"),
            "Enablement Workstreams",
            Some("Three parallel tracks for transformation"),
            SlideLayout::ThreeColumn,
            json!({ "columns": [
                {
                    "title": "Automation",
                    "items": ["Map manual workflows", "Prioritize quick wins", "Track savings and adoption"]
                },
                {
                    "title": "Intelligence",
                    "items": [
                        "Unify data sources",
                        pair("Models", "Tailor forecasts to operational KPIs"),
                        "Deliver insights inside daily tools"
                    ]
                },
                {
                    "title": "Change Management",
                    "items": [
                        "Train champions by function",
                        "Communicate milestones weekly",
                        "Instrument feedback loops"
                    ]
                }
            ]}),
            "Assign an owner per column before leaving the meeting.",
        ),
        slide(
            format!("{base}-next-steps"),
            "Next Steps",
            None,
            SlideLayout::Bullets,
            json!({ "bullets": [
                pair("Workshop", "Co-design the deployment roadmap."),
                pair("Pilot", "Launch with a focused team to prove value."),
                pair("Rollout", "Scale across the organization.")
            ]}),
            "Close with timeline expectations and decision makers required.",
        ),
        slide(
            format!("{base}-timeline"),
            "90-Day Rollout",
            None,
            SlideLayout::Timeline,
            json!({ "phases": [
                {
                    "phase": "Phase 1",
                    "title": "Plan",
                    "activities": [
                        "Kickoff with executive sponsors",
                        "Document vision & success metrics",
                        "Audit data and tool readiness"
                    ]
                },
                {
                    "phase": "Phase 2",
                    "title": "Pilot",
                    "activities": [
                        "Enable pilot team with guided workflows",
                        "Launch localized messaging experiments",
                        "Measure leading indicators weekly"
                    ]
                },
                {
                    "phase": "Phase 3",
                    "title": "Scale",
                    "activities": [
                        "Roll out automations company-wide",
                        "Formalize operating reviews",
                        "Publish case study and ROI summary"
                    ]
                }
            ]}),
            "Use this roadmap to confirm owners, checkpoints, and data instrumentation.",
        ),
    ];

    NewDeck {
        id: None,
        title: format!("{topic} Strategy Deck"),
        subtitle: Some("Generated via local template (LLM fallback)".to_string()),
        theme: None,
        slides,
    }
}
