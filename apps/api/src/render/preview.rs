//! Live preview — the structured document the render target draws.
//!
//! Unlike the LaTeX export, the preview drops the experience section when there are no
//! entries and the keywords section when there are no keywords. LinkedIn and GitHub are
//! export-only.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeState;
use crate::render::defaults::ResolvedResume;
use crate::render::template::fill;
use crate::render::templates::PREVIEW_FOOTER_TEMPLATE;
use crate::scoring::ats::{ScoreReport, ScoreTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewHeader {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewExperience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Description split on newlines; each element is one displayed line.
    pub description_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewEducation {
    pub degree: String,
    pub university: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFooter {
    pub score: u8,
    pub tier: ScoreTier,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub header: PreviewHeader,
    pub summary: String,
    /// `None` when the snapshot has no experience entries.
    pub experience: Option<Vec<PreviewExperience>>,
    pub education: PreviewEducation,
    pub skills: Vec<String>,
    /// `None` when the snapshot has no keywords.
    pub keywords: Option<Vec<String>>,
    pub footer: PreviewFooter,
}

pub fn render_preview(state: &ResumeState, report: &ScoreReport) -> Preview {
    let resume = ResolvedResume::resolve(state);

    let experience = (!resume.experience.is_empty()).then(|| {
        resume
            .experience
            .iter()
            .map(|e| PreviewExperience {
                job_title: e.job_title.to_string(),
                company: e.company.to_string(),
                start_date: e.start_date.to_string(),
                end_date: e.end_date.to_string(),
                description_lines: e.description.split('\n').map(str::to_string).collect(),
            })
            .collect()
    });

    let keywords =
        (!resume.keywords.is_empty()).then(|| resume.keywords.iter().map(str::to_string).collect());

    let score = report.score.to_string();

    Preview {
        header: PreviewHeader {
            name: resume.name.to_string(),
            title: resume.title.to_string(),
            email: resume.email.to_string(),
            phone: resume.phone.to_string(),
            location: resume.location.to_string(),
        },
        summary: resume.summary.to_string(),
        experience,
        education: PreviewEducation {
            degree: resume.degree.to_string(),
            university: resume.university.to_string(),
        },
        skills: resume.skills.iter().map(str::to_string).collect(),
        keywords,
        footer: PreviewFooter {
            score: report.score,
            tier: report.tier,
            text: fill(PREVIEW_FOOTER_TEMPLATE, &[("score", score.as_str())]),
        },
    }
}
