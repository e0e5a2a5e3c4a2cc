//! # SkillChain Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` ranks job roles against one employee's skills and explains the
//! gap to a chosen role. It sits on top of `semantic` (vectors and cosine) and
//! `canonical` (skill tokenization) and never touches the credential ledger.
//!
//! A typical flow:
//! - [`aggregate_profile`] joins the skills text of an employee's completed
//!   courses into one profile string.
//! - [`rank`] (or [`Matcher::rank`]) embeds the profile and every role and
//!   returns a [`RankOutcome`] sorted by cosine similarity.
//! - [`top_n`] / [`RankOutcome::above`] cut the ranking down for reporting.
//! - [`gap_analysis`] lists which required skills are missing.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: `top_n`, `min_score` (percent) and the role-embedding
//!   cache capacity.
//! - [`SimilarityResult`]: candidate id, raw score in `[0, 1]`, percentage
//!   rounded to two decimals.
//! - [`RankOutcome`]: ranked results plus any [`ExcludedCandidate`]s whose
//!   embedding failed. Exclusion is reported, never silent.
//! - [`SkillGap`]: gaps, matches, gap count.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{aggregate_profile, gap_analysis, CourseCatalog, MatchConfig, Matcher};
//! use semantic::HashingEmbedder;
//!
//! let catalog: CourseCatalog = [
//!     ("TC001", "Python, Data Analysis"),
//!     ("TC002", "SQL, Databases"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let profile = aggregate_profile("EMP001", &catalog, &["TC001", "TC002"]);
//! let roles = [
//!     ("JR001", "Python, SQL, Tableau"),
//!     ("JR002", "Java, Spring"),
//! ];
//!
//! let matcher = Matcher::new(HashingEmbedder::new(384, "hashing"), MatchConfig::default()).unwrap();
//! let outcome = matcher.rank(&profile, &roles).unwrap();
//! assert_eq!(outcome.results[0].candidate_id, "JR001");
//!
//! let gap = gap_analysis(&profile, roles[0].1);
//! assert_eq!(gap.gaps, vec!["tableau"]);
//! ```

pub mod engine;
pub mod gap;
pub mod profile;
pub mod types;

pub use crate::engine::{rank, recommend_from, top_n, Matcher};
pub use crate::gap::gap_analysis;
pub use crate::profile::{aggregate_profile, CourseCatalog};
pub use crate::types::{
    to_percentage, ExcludedCandidate, MatchConfig, MatchError, RankOutcome, SimilarityResult,
    SkillGap,
};
