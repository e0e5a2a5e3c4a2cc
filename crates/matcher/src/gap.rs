use std::collections::HashSet;

use canonical::{dedup_tokens, tokenize};

use crate::SkillGap;

/// Compare a role's required skills with an employee's profile.
///
/// Both texts go through [`canonical::tokenize`], so comparison is exact
/// string equality on lowercase tokens. Required skills are de-duplicated
/// (first occurrence wins) and reported in requirement order.
pub fn gap_analysis(employee_profile: &str, role_requirements: &str) -> SkillGap {
    let possessed: HashSet<String> = tokenize(employee_profile).into_iter().collect();
    let required = dedup_tokens(&tokenize(role_requirements));

    let (matches, gaps): (Vec<String>, Vec<String>) = required
        .into_iter()
        .partition(|skill| possessed.contains(skill));

    SkillGap {
        gap_count: gaps.len(),
        gaps,
        matches,
    }
}
