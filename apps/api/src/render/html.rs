//! HTML fragment for a browser preview pane. All user text is escaped.

use std::borrow::Cow;

use crate::render::preview::{Preview, PreviewExperience};
use crate::render::template::fill;
use crate::render::templates::{
    PREVIEW_HTML_ENTRY_TEMPLATE, PREVIEW_HTML_EXPERIENCE_TEMPLATE, PREVIEW_HTML_KEYWORDS_TEMPLATE,
    PREVIEW_HTML_KEYWORD_BADGE, PREVIEW_HTML_SKILL_BADGE, PREVIEW_HTML_TEMPLATE,
};

pub fn render_preview_html(preview: &Preview) -> String {
    let header = &preview.header;

    let experience = preview
        .experience
        .as_deref()
        .map(|entries| {
            let entries: String = entries.iter().map(render_entry).collect();
            fill(PREVIEW_HTML_EXPERIENCE_TEMPLATE, &[("entries", entries.as_str())])
        })
        .unwrap_or_default();

    let skills = badges(&preview.skills, PREVIEW_HTML_SKILL_BADGE);

    let keywords = preview
        .keywords
        .as_deref()
        .map(|keywords| {
            let rendered = badges(keywords, PREVIEW_HTML_KEYWORD_BADGE);
            fill(PREVIEW_HTML_KEYWORDS_TEMPLATE, &[("keywords", rendered.as_str())])
        })
        .unwrap_or_default();

    fill(
        PREVIEW_HTML_TEMPLATE,
        &[
            ("name", &*escape_html(&header.name)),
            ("title", &*escape_html(&header.title)),
            ("email", &*escape_html(&header.email)),
            ("phone", &*escape_html(&header.phone)),
            ("location", &*escape_html(&header.location)),
            ("summary", &*escape_html(&preview.summary)),
            ("experience", experience.as_str()),
            ("degree", &*escape_html(&preview.education.degree)),
            ("university", &*escape_html(&preview.education.university)),
            ("skills", skills.as_str()),
            ("keywords", keywords.as_str()),
            ("tier", preview.footer.tier.as_str()),
            ("footer", &*escape_html(&preview.footer.text)),
        ],
    )
}

fn render_entry(entry: &PreviewExperience) -> String {
    let description = entry
        .description_lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");

    fill(
        PREVIEW_HTML_ENTRY_TEMPLATE,
        &[
            ("job_title", &*escape_html(&entry.job_title)),
            ("company", &*escape_html(&entry.company)),
            ("start_date", &*escape_html(&entry.start_date)),
            ("end_date", &*escape_html(&entry.end_date)),
            ("description", description.as_str()),
        ],
    )
}

fn badges(values: &[String], template: &str) -> String {
    values
        .iter()
        .map(|value| fill(template, &[("value", &*escape_html(value))]))
        .collect()
}

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
