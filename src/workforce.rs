use matcher::CourseCatalog;
use serde::{Deserialize, Serialize};

/// A target role and the skills it requires (comma/semicolon separated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    pub role_id: String,
    pub title: String,
    pub required_skills: String,
}

impl JobRole {
    pub fn new(
        role_id: impl Into<String>,
        title: impl Into<String>,
        required_skills: impl Into<String>,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            title: title.into(),
            required_skills: required_skills.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    pub skills_taught: String,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        name: impl Into<String>,
        skills_taught: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            skills_taught: skills_taught.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub current_role: String,
    /// Course ids in the order they were listed.
    pub completed_courses: Vec<String>,
}

impl Employee {
    /// `completed_courses` uses the dataset's comma-separated form, e.g.
    /// `"TC001, TC002,TC005"`.
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        current_role: impl Into<String>,
        completed_courses: &str,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            current_role: current_role.into(),
            completed_courses: Self::parse_completed_courses(completed_courses),
        }
    }

    /// Split a comma-separated id list; ids are trimmed and empties dropped.
    pub fn parse_completed_courses(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// The three datasets the inference engine works over.
///
/// When a dataset repeats an id, the first row wins everywhere: id lookups,
/// the course catalog, and the per-employee entries of
/// [`SkillInference::recommendations_report`](crate::SkillInference::recommendations_report).
/// Later rows with the same id are ignored.
#[derive(Debug, Clone, Default)]
pub struct Workforce {
    roles: Vec<JobRole>,
    courses: Vec<Course>,
    employees: Vec<Employee>,
    catalog: CourseCatalog,
}

impl Workforce {
    pub fn new(roles: Vec<JobRole>, courses: Vec<Course>, employees: Vec<Employee>) -> Self {
        let mut catalog = CourseCatalog::new();
        for course in &courses {
            if catalog.skills_for(&course.course_id).is_none() {
                catalog.insert(course.course_id.clone(), course.skills_taught.clone());
            }
        }
        Self {
            roles,
            courses,
            employees,
            catalog,
        }
    }

    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    pub fn role(&self, role_id: &str) -> Option<&JobRole> {
        self.roles.iter().find(|r| r.role_id == role_id)
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }
}
