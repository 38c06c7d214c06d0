//! Form edits — the mutation vocabulary of the resume form.
//!
//! The snapshot itself is never edited in place by callers: [`apply_edits`] clones it,
//! applies a batch, and hands back the new snapshot. A failing edit rejects the whole
//! batch so the caller's snapshot is untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{ContactInfo, Education, ExperienceEntry, ResumeState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Experience entry {index} does not exist ({len} entries)")]
    ExperienceIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    University,
    GradYear,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    JobTitle,
    Company,
    StartDate,
    EndDate,
    Description,
}

impl ContactInfo {
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::JobTitle => &mut self.job_title,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Location => &mut self.location,
            ContactField::Linkedin => &mut self.linkedin,
            ContactField::Github => &mut self.github,
        }
    }
}

impl Education {
    pub fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::University => &mut self.university,
            EducationField::GradYear => &mut self.grad_year,
            EducationField::Gpa => &mut self.gpa,
        }
    }
}

impl ExperienceEntry {
    pub fn field_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::JobTitle => &mut self.job_title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        }
    }
}

/// A single user action on the form.
///
/// Serialized with an `op` tag, e.g. `{"op": "add_skill", "value": "Rust"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FormEdit {
    SetContact {
        field: ContactField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    SetEducation {
        field: EducationField,
        value: String,
    },
    /// Appends an entry; a blank one when `entry` is omitted.
    AddExperience {
        #[serde(default)]
        entry: Option<ExperienceEntry>,
    },
    UpdateExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    RemoveExperience {
        index: usize,
    },
    AddSkill {
        value: String,
    },
    RemoveSkill {
        value: String,
    },
    AddKeyword {
        value: String,
    },
    RemoveKeyword {
        value: String,
    },
}

impl FormEdit {
    /// Applies the edit to `state`. Returns whether anything changed.
    ///
    /// Blank or duplicate tags and removal of absent tags are no-ops, not errors.
    pub fn apply(&self, state: &mut ResumeState) -> Result<bool, FormError> {
        let changed = match self {
            FormEdit::SetContact { field, value } => {
                replace(state.contact.field_mut(*field), value)
            }
            FormEdit::SetSummary { value } => replace(&mut state.summary, value),
            FormEdit::SetEducation { field, value } => {
                replace(state.education.field_mut(*field), value)
            }
            FormEdit::AddExperience { entry } => {
                state.experience.push(entry.clone().unwrap_or_default());
                true
            }
            FormEdit::UpdateExperience {
                index,
                field,
                value,
            } => {
                let len = state.experience.len();
                let entry = state
                    .experience
                    .get_mut(*index)
                    .ok_or(FormError::ExperienceIndexOutOfRange { index: *index, len })?;
                replace(entry.field_mut(*field), value)
            }
            FormEdit::RemoveExperience { index } => {
                let len = state.experience.len();
                if *index >= len {
                    return Err(FormError::ExperienceIndexOutOfRange { index: *index, len });
                }
                state.experience.remove(*index);
                true
            }
            FormEdit::AddSkill { value } => state.add_skill(value),
            FormEdit::RemoveSkill { value } => state.remove_skill(value),
            FormEdit::AddKeyword { value } => state.add_keyword(value),
            FormEdit::RemoveKeyword { value } => state.remove_keyword(value),
        };
        Ok(changed)
    }
}

fn replace(slot: &mut String, value: &str) -> bool {
    if slot == value {
        return false;
    }
    *slot = value.to_string();
    true
}

/// Applies `edits` in order to a copy of `state` and returns the new snapshot.
pub fn apply_edits(state: &ResumeState, edits: &[FormEdit]) -> Result<ResumeState, FormError> {
    let mut next = state.clone();
    for edit in edits {
        edit.apply(&mut next)?;
    }
    Ok(next)
}
