use std::collections::HashMap;

use tracing::debug;

/// Lookup from course id to its skills-taught text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseCatalog {
    skills: HashMap<String, String>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a course's skills text.
    pub fn insert(&mut self, course_id: impl Into<String>, skills_text: impl Into<String>) {
        self.skills.insert(course_id.into(), skills_text.into());
    }

    pub fn skills_for(&self, course_id: &str) -> Option<&str> {
        self.skills.get(course_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CourseCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            skills: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Join the skills text of every resolvable completed course with `", "`.
///
/// Courses are visited in the order given. Ids missing from the catalog are
/// skipped; when none resolve the result is the empty string.
pub fn aggregate_profile<S: AsRef<str>>(
    employee_id: &str,
    catalog: &CourseCatalog,
    completed_courses: &[S],
) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(completed_courses.len());
    for course_id in completed_courses {
        let course_id = course_id.as_ref();
        match catalog.skills_for(course_id) {
            Some(skills) => parts.push(skills),
            None => debug!(employee_id, course_id, "completed course not in catalog; skipped"),
        }
    }
    parts.join(", ")
}
