/// System prompt sent with every generation request.
pub const SYSTEM_PROMPT: &str = r#"You are an expert sales enablement designer.
Create concise slide decks in JSON following this schema:
{
  "title": string,
  "subtitle": string,
  "slides": [
    {
      "id": kebab-case string,
      "title": string,
      "subtitle"?: string,
      "layout": "title" | "bullets" | "two-column" | "three-column" | "timeline",
      "content": object matching the layout,
      "notes"?: string
    }
  ]
}

Rules:
- Provide 4 to 8 slides covering the storyline: problem, solution, metrics, next steps.
- For "title" layout, include { "tagline": string } inside content.
- For "bullets", include { "bullets": [{ "label": string, "description": string }] }.
- For "two-column", include { "left": {"subtitle"?, "bullets"?, "metrics"?}, "right": { ... } } with metrics array of { value, label }.
- For "three-column", include { "columns": [{ "title": string, "items": [string | { "label": string, "description": string }] }] }.
- For "timeline", include { "phases": [{ "phase": string, "title": string, "activities": [string] }] } describing sequential phases.
- Ensure all strings are plain text (no markdown).
- Keep slides engaging, business-focused, and aligned with the given context.
- Return only JSON; do not wrap in markdown."#;

/// `Title: ...`, `Subtitle: ...` and the prompt, separated by blank lines.
/// Empty parts are left out.
pub fn user_prompt(prompt: &str, title: Option<&str>, subtitle: Option<&str>) -> String {
    let title = title.filter(|t| !t.is_empty()).map(|t| format!("Title: {t}"));
    let subtitle = subtitle.filter(|s| !s.is_empty()).map(|s| format!("Subtitle: {s}"));
    let prompt = Some(prompt.to_string()).filter(|p| !p.is_empty());

    [title, subtitle, prompt]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
}
