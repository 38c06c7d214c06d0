use serde::{Deserialize, Serialize};

/// Skills every new resume starts with.
pub const DEFAULT_SKILLS: [&str; 2] = ["Leadership", "Communication"];

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub grad_year: String,
    pub gpa: String,
}

/// One work-experience block. `description` holds one bullet per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    /// Blank means the position is current ("Present").
    pub end_date: String,
    pub description: String,
}

/// Ordered set of trimmed, non-blank strings.
///
/// Insertion order is kept for display; duplicates (case-sensitive) are ignored.
/// Deserialization goes through [`TagSet::insert`], so a payload can never smuggle
/// blank or repeated tags past the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a trimmed tag. Returns false for blank input or a duplicate.
    pub fn insert(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Removes a tag. Returns false if it was not present.
    pub fn remove(&mut self, value: &str) -> bool {
        let value = value.trim();
        match self.0.iter().position(|t| t == value) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|t| t == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for value in iter {
            set.insert(value.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

/// Snapshot of every resume form value at one point in time.
///
/// Scoring and rendering both read a snapshot and nothing else. A payload that omits
/// `skills` gets [`DEFAULT_SKILLS`]; an explicit empty list stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeState {
    pub contact: ContactInfo,
    pub summary: String,
    pub education: Education,
    pub experience: Vec<ExperienceEntry>,
    pub skills: TagSet,
    pub keywords: TagSet,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            contact: ContactInfo::default(),
            summary: String::new(),
            education: Education::default(),
            experience: Vec::new(),
            skills: DEFAULT_SKILLS.iter().collect(),
            keywords: TagSet::new(),
        }
    }
}

impl ResumeState {
    pub fn add_skill(&mut self, skill: &str) -> bool {
        self.skills.insert(skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        self.skills.remove(skill)
    }

    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        self.keywords.insert(keyword)
    }

    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        self.keywords.remove(keyword)
    }
}
