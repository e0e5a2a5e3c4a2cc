use std::collections::BTreeMap;

use matcher::{
    aggregate_profile, gap_analysis, recommend_from, top_n, MatchConfig, Matcher, RankOutcome,
    SimilarityResult,
};
use semantic::{CacheStats, CachedEmbedder, Embedder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workforce::{Employee, JobRole, Workforce};
use crate::PipelineError;

/// Gap analysis for one employee against one role, with the role's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub employee_id: String,
    pub target_role_id: String,
    pub target_role: String,
    /// `None` when the role was excluded from the ranking.
    pub similarity_percentage: Option<f64>,
    pub matching_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub gap_count: usize,
}

/// A ranked role joined with its dataset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role_id: String,
    pub role_title: String,
    pub required_skills: String,
    pub similarity_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecommendations {
    pub name: String,
    pub current_role: String,
    pub top_recommendations: Vec<RoleRecommendation>,
    /// Gap analysis for the first recommendation; absent when there is none.
    pub skill_gap_analysis: Option<SkillGapReport>,
}

/// Keyed by employee id, ascending.
pub type RecommendationsReport = BTreeMap<String, EmployeeRecommendations>;

/// Role recommendations and skill gaps over a [`Workforce`].
///
/// Every embedding goes through an LRU cache sized by
/// [`MatchConfig::cache_capacity`], so role texts are embedded once per
/// engine rather than once per employee.
pub struct SkillInference<E> {
    workforce: Workforce,
    matcher: Matcher<CachedEmbedder<E>>,
}

impl<E: Embedder> SkillInference<E> {
    pub fn new(workforce: Workforce, embedder: E, config: MatchConfig) -> Result<Self, PipelineError> {
        let cached = CachedEmbedder::new(embedder, config.cache_capacity);
        let matcher = Matcher::new(cached, config)?;
        Ok(Self { workforce, matcher })
    }

    pub fn workforce(&self) -> &Workforce {
        &self.workforce
    }

    pub fn config(&self) -> &MatchConfig {
        self.matcher.config()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.matcher.embedder().stats()
    }

    /// Skills text of every completed course the catalog knows, joined with `", "`.
    pub fn employee_profile(&self, employee_id: &str) -> Result<String, PipelineError> {
        let employee = self.employee(employee_id)?;
        Ok(self.profile_of(employee))
    }

    /// Every role ranked against the employee's profile.
    pub fn role_similarity(&self, employee_id: &str) -> Result<RankOutcome, PipelineError> {
        let employee = self.employee(employee_id)?;
        self.rank_roles(&self.profile_of(employee))
    }

    /// The best `n` roles at or above [`MatchConfig::min_score`].
    pub fn top_recommendations(
        &self,
        employee_id: &str,
        n: usize,
    ) -> Result<Vec<SimilarityResult>, PipelineError> {
        let outcome = self.role_similarity(employee_id)?;
        Ok(top_n(outcome.above(self.config().min_score), n).to_vec())
    }

    pub fn skill_gaps(&self, employee_id: &str, role_id: &str) -> Result<SkillGapReport, PipelineError> {
        let employee = self.employee(employee_id)?;
        let role = self
            .workforce
            .role(role_id)
            .ok_or_else(|| PipelineError::UnknownRole(role_id.to_string()))?;
        let profile = self.profile_of(employee);
        let outcome = self.rank_roles(&profile)?;
        Ok(gap_report(employee, role, &profile, &outcome))
    }

    /// Top recommendations and the leading role's gap analysis for every employee.
    pub fn recommendations_report(&self) -> Result<RecommendationsReport, PipelineError> {
        let mut report = RecommendationsReport::new();
        for employee in self.workforce.employees() {
            // First row wins, matching `Workforce::employee`.
            if report.contains_key(&employee.employee_id) {
                continue;
            }
            let profile = self.profile_of(employee);
            let outcome = self.rank_roles(&profile)?;

            let top_recommendations: Vec<RoleRecommendation> =
                recommend_from(&outcome, self.config())
                    .into_iter()
                    .filter_map(|result| {
                        let role = self.workforce.role(&result.candidate_id)?;
                        Some(RoleRecommendation {
                            role_id: role.role_id.clone(),
                            role_title: role.title.clone(),
                            required_skills: role.required_skills.clone(),
                            similarity_percentage: result.percentage,
                        })
                    })
                    .collect();

            let skill_gap_analysis = top_recommendations
                .first()
                .and_then(|top| self.workforce.role(&top.role_id))
                .map(|role| gap_report(employee, role, &profile, &outcome));

            report.insert(
                employee.employee_id.clone(),
                EmployeeRecommendations {
                    name: employee.name.clone(),
                    current_role: employee.current_role.clone(),
                    top_recommendations,
                    skill_gap_analysis,
                },
            );
        }
        debug!(employees = report.len(), "recommendations report built");
        Ok(report)
    }

    fn employee(&self, employee_id: &str) -> Result<&Employee, PipelineError> {
        self.workforce
            .employee(employee_id)
            .ok_or_else(|| PipelineError::UnknownEmployee(employee_id.to_string()))
    }

    fn profile_of(&self, employee: &Employee) -> String {
        aggregate_profile(
            &employee.employee_id,
            self.workforce.catalog(),
            &employee.completed_courses,
        )
    }

    fn rank_roles(&self, profile: &str) -> Result<RankOutcome, PipelineError> {
        let candidates: Vec<(&str, &str)> = self
            .workforce
            .roles()
            .iter()
            .map(|role| (role.role_id.as_str(), role.required_skills.as_str()))
            .collect();
        Ok(self.matcher.rank(profile, &candidates)?)
    }
}

fn gap_report(employee: &Employee, role: &JobRole, profile: &str, outcome: &RankOutcome) -> SkillGapReport {
    let gap = gap_analysis(profile, &role.required_skills);
    SkillGapReport {
        employee_id: employee.employee_id.clone(),
        target_role_id: role.role_id.clone(),
        target_role: role.title.clone(),
        similarity_percentage: outcome.get(&role.role_id).map(|r| r.percentage),
        matching_skills: gap.matches,
        skill_gaps: gap.gaps,
        gap_count: gap.gap_count,
    }
}
