//! LaTeX export — renders a snapshot as a standalone `article` document.
//!
//! By default user text is interpolated verbatim, so `%`, `&`, `_` and friends reach the
//! output unescaped and may break compilation. `LatexOptions::escape_special` turns on
//! escaping for every user-supplied field.
//!
//! Output is a pure function of (snapshot, score, options): download, clipboard copy and
//! the on-screen code view all receive the same bytes.

use std::borrow::Cow;

use serde::Serialize;

use crate::models::resume::{ResumeState, TagSet};
use crate::render::defaults::{ResolvedExperience, ResolvedResume};
use crate::render::template::fill;
use crate::render::templates::{
    LATEX_BULLET_TEMPLATE, LATEX_DOCUMENT_TEMPLATE, LATEX_EXPERIENCE_TEMPLATE,
    LATEX_GITHUB_TEMPLATE, LATEX_GPA_TEMPLATE, LATEX_GRAD_YEAR_TEMPLATE,
    LATEX_LINKEDIN_TEMPLATE,
};
use crate::scoring::ats::ScoreReport;

pub const EXPORT_FILENAME: &str = "resume.tex";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatexOptions {
    /// Escape LaTeX special characters in user text.
    pub escape_special: bool,
}

impl LatexOptions {
    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_special {
            escape_latex(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn url<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_special {
            escape_url(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// Payload for the copy / code-view consumers.
#[derive(Debug, Clone, Serialize)]
pub struct LatexExport {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub latex: String,
}

impl LatexExport {
    pub fn new(latex: String) -> Self {
        Self {
            filename: EXPORT_FILENAME,
            mime_type: EXPORT_MIME_TYPE,
            latex,
        }
    }
}

/// Renders the full LaTeX document for `state`, embedding `report.score`.
pub fn render_latex(state: &ResumeState, report: &ScoreReport, options: LatexOptions) -> String {
    let resume = ResolvedResume::resolve(state);
    let score = report.score.to_string();

    let name = options.text(resume.name);
    let title = options.text(resume.title);
    let email = options.text(resume.email);
    let phone = options.text(resume.phone);
    let location = options.text(resume.location);
    let summary = options.text(resume.summary);
    let degree = options.text(resume.degree);
    let university = options.text(resume.university);

    let linkedin_line = resume
        .linkedin
        .map(|url| fill(LATEX_LINKEDIN_TEMPLATE, &[("url", &*options.url(url))]))
        .unwrap_or_default();
    let github_line = resume
        .github
        .map(|url| fill(LATEX_GITHUB_TEMPLATE, &[("url", &*options.url(url))]))
        .unwrap_or_default();
    let grad_year = resume
        .grad_year
        .map(|year| fill(LATEX_GRAD_YEAR_TEMPLATE, &[("grad_year", &*options.text(year))]))
        .unwrap_or_default();
    let gpa_line = resume
        .gpa
        .map(|gpa| fill(LATEX_GPA_TEMPLATE, &[("gpa", &*options.text(gpa))]))
        .unwrap_or_default();

    let experience: String = resume
        .experience
        .iter()
        .map(|entry| render_experience(entry, options))
        .collect();

    let skills = join_tags(resume.skills, options);
    let keywords = join_tags(resume.keywords, options);

    fill(
        LATEX_DOCUMENT_TEMPLATE,
        &[
            ("score", score.as_str()),
            ("name", &*name),
            ("title", &*title),
            ("email", &*email),
            ("phone", &*phone),
            ("location", &*location),
            ("linkedin_line", linkedin_line.as_str()),
            ("github_line", github_line.as_str()),
            ("summary", &*summary),
            ("experience", experience.as_str()),
            ("degree", &*degree),
            ("university", &*university),
            ("grad_year", grad_year.as_str()),
            ("gpa_line", gpa_line.as_str()),
            ("skills", skills.as_str()),
            ("keywords", keywords.as_str()),
        ],
    )
}

fn render_experience(entry: &ResolvedExperience<'_>, options: LatexOptions) -> String {
    let bullets = description_bullets(entry.description)
        .into_iter()
        .map(|line| fill(LATEX_BULLET_TEMPLATE, &[("line", &*options.text(line))]))
        .collect::<Vec<_>>()
        .join("\n");

    fill(
        LATEX_EXPERIENCE_TEMPLATE,
        &[
            ("job_title", &*options.text(entry.job_title)),
            ("company", &*options.text(entry.company)),
            ("start_date", &*options.text(entry.start_date)),
            ("end_date", &*options.text(entry.end_date)),
            ("bullets", bullets.as_str()),
        ],
    )
}

/// Splits a description into bullet lines: one per non-blank line, trimmed.
pub fn description_bullets(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn join_tags(tags: &TagSet, options: LatexOptions) -> String {
    tags.iter()
        .map(|tag| options.text(tag))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escapes the characters LaTeX treats specially in running text.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    const SPECIAL: &[char] = &['\\', '%', '&', '_', '$', '#', '{', '}', '~', '^'];
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '%' | '&' | '_' | '$' | '#' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `\href` takes the URL mostly verbatim; only `%` and `#` need a backslash.
fn escape_url(url: &str) -> Cow<'_, str> {
    if !url.contains(['%', '#']) {
        return Cow::Borrowed(url);
    }
    Cow::Owned(url.replace('%', r"\%").replace('#', r"\#"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;
    use crate::scoring::ats::compute_score;

    fn render(state: &ResumeState) -> String {
        render_latex(state, &compute_score(state), LatexOptions::default())
    }

    fn sample_state() -> ResumeState {
        let mut state = ResumeState::default();
        state.contact.full_name = "Jane Smith".to_string();
        state.contact.job_title = "Backend Engineer".to_string();
        state.contact.email = "jane@example.com".to_string();
        state.summary = "Engineer focused on reliable distributed systems.".to_string();
        state.education.degree = "BSc Computer Science".to_string();
        state.education.university = "State University".to_string();
        state.experience.push(ExperienceEntry {
            job_title: "Senior Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "03/2019".to_string(),
            end_date: String::new(),
            description: "Led the team\n\nDeveloped new process".to_string(),
        });
        state.add_keyword("Kubernetes");
        state.add_keyword("Rust");
        state
    }

    #[test]
    fn test_header_embeds_score() {
        let state = sample_state();
        let report = compute_score(&state);
        let latex = render_latex(&state, &report, LatexOptions::default());
        assert!(latex.starts_with("% ATS-Optimized Resume\n"));
        assert!(latex.contains(&format!("% Generated with ATS Score: {}/100", report.score)));
        assert!(latex.contains(&format!("| ATS Score: {}/100", report.score)));
        assert!(latex.ends_with(r"\end{document}"));
    }

    #[test]
    fn test_constant_preamble() {
        let latex = render(&ResumeState::default());
        assert!(latex.contains(r"\documentclass[11pt,a4paper]{article}"));
        assert!(latex.contains(r"\usepackage[margin=0.75in]{geometry}"));
        assert!(latex.contains(r"\usepackage{fontawesome5}"));
        assert!(latex.contains(r"\setlist{noitemsep, topsep=0pt}"));
    }

    #[test]
    fn test_blank_name_uses_placeholder() {
        let latex = render(&ResumeState::default());
        assert!(latex.contains(r"{\Huge \textbf{John Doe}}\\"));
        assert!(latex.contains(r"\faEnvelope\ john@example.com \quad"));
        assert!(latex.contains(r"\section*{Professional Summary}
Professional summary goes here..."));
    }

    #[test]
    fn test_blank_line_in_description_discarded() {
        let latex = render(&sample_state());
        assert_eq!(latex.matches(r"\item").count(), 2);
        assert!(latex.contains("  \\item Led the team\n  \\item Developed new process\n"));
    }

    #[test]
    fn test_experience_block_layout() {
        let latex = render(&sample_state());
        assert!(latex.contains(r"\subsection*{Senior Engineer}"));
        assert!(latex.contains(r"\textbf{Acme} \hfill 03/2019 -- Present"));
    }

    #[test]
    fn test_links_only_when_present() {
        let mut state = sample_state();
        let latex = render(&state);
        assert!(!latex.contains(r"\faLinkedin"));
        assert!(!latex.contains(r"\faGithub"));

        state.contact.linkedin = "https://linkedin.com/in/jane".to_string();
        state.contact.github = "https://github.com/jane".to_string();
        let latex = render(&state);
        assert!(latex.contains(r"\faLinkedin\ \href{https://linkedin.com/in/jane}{LinkedIn} \quad"));
        assert!(latex.contains(r"\faGithub\ \href{https://github.com/jane}{GitHub}"));
    }

    #[test]
    fn test_education_optional_lines() {
        let mut state = sample_state();
        let latex = render(&state);
        assert!(latex.contains("\\textbf{BSc Computer Science}\\\\\nState University\\\\\n"));
        assert!(!latex.contains("GPA:"));

        state.education.grad_year = "2018".to_string();
        state.education.gpa = "3.8".to_string();
        let latex = render(&state);
        assert!(latex.contains("State University \\hfill 2018\\\\\nGPA: 3.8"));
    }

    #[test]
    fn test_tags_joined_in_insertion_order() {
        let latex = render(&sample_state());
        assert!(latex.contains("\\section*{Skills}\nLeadership, Communication\n"));
        assert!(latex.contains("\\section*{Keywords}\nKubernetes, Rust\n"));
    }

    #[test]
    fn test_keywords_header_kept_when_empty() {
        let mut state = sample_state();
        state.remove_keyword("Kubernetes");
        state.remove_keyword("Rust");
        let latex = render(&state);
        assert!(latex.contains("\\section*{Keywords}\n\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let state = sample_state();
        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn test_special_characters_verbatim_by_default() {
        let mut state = sample_state();
        state.summary = "Cut costs 40% & shipped R&D_tools".to_string();
        let latex = render(&state);
        assert!(latex.contains("Cut costs 40% & shipped R&D_tools"));
    }

    #[test]
    fn test_special_characters_escaped_when_enabled() {
        let mut state = sample_state();
        state.summary = "Cut costs 40% & shipped R&D_tools".to_string();
        state.contact.linkedin = "https://example.com/a%20b#top".to_string();
        let options = LatexOptions {
            escape_special: true,
        };
        let latex = render_latex(&state, &compute_score(&state), options);
        assert!(latex.contains(r"Cut costs 40\% \& shipped R\&D\_tools"));
        assert!(latex.contains(r"\href{https://example.com/a\%20b\#top}{LinkedIn}"));
    }

    #[test]
    fn test_escape_latex_table() {
        assert_eq!(escape_latex("plain"), Cow::Borrowed("plain"));
        assert_eq!(escape_latex(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape_latex("{x}^~$#"), r"\{x\}\textasciicircum{}\textasciitilde{}\$\#");
    }

    #[test]
    fn test_whitespace_only_description_yields_no_bullets() {
        assert!(description_bullets(" \n\t\n").is_empty());
        assert_eq!(description_bullets("  one \r\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_blank_description_uses_placeholder_bullet() {
        let mut state = ResumeState::default();
        state.experience.push(ExperienceEntry::default());
        let latex = render(&state);
        assert!(latex.contains("  \\item Responsibilities description\n"));
        assert!(latex.contains(r"\subsection*{Job Title}"));
        assert!(latex.contains(r"\textbf{Company Name} \hfill 01/2020 -- Present"));
    }
}
