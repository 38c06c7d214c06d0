//! Placeholder substitution shared by the preview and the LaTeX export.
//!
//! Blank (empty or whitespace-only) values are swapped for a fixed placeholder so both
//! outputs always show a complete document. Non-blank values pass through untouched.
//! Optional fields without a placeholder resolve to `None` and are omitted downstream.

use crate::models::resume::{is_blank, ExperienceEntry, ResumeState, TagSet};

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_TITLE: &str = "Software Developer";
pub const DEFAULT_EMAIL: &str = "john@example.com";
pub const DEFAULT_PHONE: &str = "(123) 456-7890";
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";
pub const DEFAULT_SUMMARY: &str = "Professional summary goes here...";
pub const DEFAULT_DEGREE: &str = "Bachelor of Science";
pub const DEFAULT_UNIVERSITY: &str = "University Name";

pub const DEFAULT_JOB_TITLE: &str = "Job Title";
pub const DEFAULT_COMPANY: &str = "Company Name";
pub const DEFAULT_START_DATE: &str = "01/2020";
pub const DEFAULT_END_DATE: &str = "Present";
pub const DEFAULT_DESCRIPTION: &str = "Responsibilities description";

pub fn or_default<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if is_blank(value) {
        placeholder
    } else {
        value
    }
}

pub fn non_blank(value: &str) -> Option<&str> {
    (!is_blank(value)).then_some(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExperience<'a> {
    pub job_title: &'a str,
    pub company: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub description: &'a str,
}

impl<'a> ResolvedExperience<'a> {
    pub fn resolve(entry: &'a ExperienceEntry) -> Self {
        Self {
            job_title: or_default(&entry.job_title, DEFAULT_JOB_TITLE),
            company: or_default(&entry.company, DEFAULT_COMPANY),
            start_date: or_default(&entry.start_date, DEFAULT_START_DATE),
            end_date: or_default(&entry.end_date, DEFAULT_END_DATE),
            description: or_default(&entry.description, DEFAULT_DESCRIPTION),
        }
    }
}

/// A snapshot with every display field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResume<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub linkedin: Option<&'a str>,
    pub github: Option<&'a str>,
    pub summary: &'a str,
    pub degree: &'a str,
    pub university: &'a str,
    pub grad_year: Option<&'a str>,
    pub gpa: Option<&'a str>,
    pub experience: Vec<ResolvedExperience<'a>>,
    pub skills: &'a TagSet,
    pub keywords: &'a TagSet,
}

impl<'a> ResolvedResume<'a> {
    pub fn resolve(state: &'a ResumeState) -> Self {
        let contact = &state.contact;
        let education = &state.education;
        Self {
            name: or_default(&contact.full_name, DEFAULT_NAME),
            title: or_default(&contact.job_title, DEFAULT_TITLE),
            email: or_default(&contact.email, DEFAULT_EMAIL),
            phone: or_default(&contact.phone, DEFAULT_PHONE),
            location: or_default(&contact.location, DEFAULT_LOCATION),
            linkedin: non_blank(&contact.linkedin),
            github: non_blank(&contact.github),
            summary: or_default(&state.summary, DEFAULT_SUMMARY),
            degree: or_default(&education.degree, DEFAULT_DEGREE),
            university: or_default(&education.university, DEFAULT_UNIVERSITY),
            grad_year: non_blank(&education.grad_year),
            gpa: non_blank(&education.gpa),
            experience: state
                .experience
                .iter()
                .map(ResolvedExperience::resolve)
                .collect(),
            skills: &state.skills,
            keywords: &state.keywords,
        }
    }
}
