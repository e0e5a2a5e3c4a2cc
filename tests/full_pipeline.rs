use skillchain::{
    Course, Employee, JobRole, PipelineError, SkillChainConfig, SkillInference, StubEmbedder,
    Workforce,
};

fn workforce() -> Workforce {
    Workforce::new(
        vec![
            JobRole::new("JR001", "Data Analyst", "Python, SQL, Tableau, Statistics"),
            JobRole::new("JR002", "Data Engineer", "Python, Spark, Airflow, SQL"),
            JobRole::new("JR003", "Frontend Developer", "JavaScript, React, CSS"),
            JobRole::new("JR004", "Data Strategy Officer", "Data Governance; Strategy; SQL"),
        ],
        vec![
            Course::new("TC001", "Python for Data Analysis", "Python, Pandas, Data Analysis"),
            Course::new("TC002", "Advanced SQL for Data Scientists", "SQL, Query Optimization"),
            Course::new("TC010", "Data Engineering with Apache Spark", "Spark, Airflow"),
        ],
        vec![
            Employee::new("EMP001", "Alice", "Data Analyst", "TC001, TC002"),
            Employee::new("EMP007", "Gus", "Analyst", "TC010,TC002"),
            Employee::new("EMP009", "Ivy", "Intern", "TC404, TC405"),
        ],
    )
}

fn hashing_config() -> SkillChainConfig {
    SkillChainConfig::from_yaml(
        r#"
version: "1.0"
semantic:
  mode: hashing
  tier: fast
  model_name: skill-hashing
matcher:
  top_n: 2
"#,
    )
    .unwrap()
}

#[test]
fn config_built_engine_produces_full_report() -> Result<(), PipelineError> {
    let engine = hashing_config().build_inference(workforce())?;

    let report = engine.recommendations_report()?;
    assert_eq!(report.len(), 3);
    for entry in report.values() {
        assert_eq!(entry.top_recommendations.len(), 2);
        let gap = entry.skill_gap_analysis.as_ref().unwrap();
        assert_eq!(gap.target_role_id, entry.top_recommendations[0].role_id);
        assert_eq!(gap.gap_count, gap.skill_gaps.len());
    }

    let gus = &report["EMP007"];
    assert_eq!(gus.top_recommendations[0].role_id, "JR002");
    let gap = gus.skill_gap_analysis.as_ref().unwrap();
    assert_eq!(gap.matching_skills, vec!["spark", "airflow", "sql"]);
    assert_eq!(gap.skill_gaps, vec!["python"]);
    Ok(())
}

#[test]
fn unresolvable_courses_give_empty_profile_and_full_ranking() -> Result<(), PipelineError> {
    let engine = SkillInference::new(
        workforce(),
        StubEmbedder::new(384, "stub"),
        Default::default(),
    )?;

    assert_eq!(engine.employee_profile("EMP009")?, "");
    let outcome = engine.role_similarity("EMP009")?;
    assert!(!outcome.is_partial());
    let ids: Vec<_> = outcome.results.iter().map(|r| r.candidate_id.as_str()).collect();
    let mut sorted_ids = ids.clone();
    sorted_ids.sort_unstable();
    assert_eq!(sorted_ids, vec!["JR001", "JR002", "JR003", "JR004"]);
    assert!(outcome
        .results
        .iter()
        .all(|r| (0.0..=1.0).contains(&r.score) && r.score.is_finite()));

    let gap = engine.skill_gaps("EMP009", "JR003")?;
    assert!(gap.matching_skills.is_empty());
    assert_eq!(gap.skill_gaps, vec!["javascript", "react", "css"]);
    Ok(())
}

#[test]
fn ranking_is_a_sorted_permutation() -> Result<(), PipelineError> {
    let engine = SkillInference::new(
        workforce(),
        StubEmbedder::new(384, "stub"),
        Default::default(),
    )?;

    for employee in ["EMP001", "EMP007", "EMP009"] {
        let outcome = engine.role_similarity(employee)?;
        assert_eq!(outcome.results.len(), 4);
        assert!(outcome
            .results
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        for result in &outcome.results {
            assert_eq!(result.percentage, (result.score * 10_000.0).round() / 100.0);
        }
    }
    Ok(())
}

#[test]
fn gap_report_uses_same_score_as_ranking() -> Result<(), PipelineError> {
    let engine = hashing_config().build_inference(workforce())?;
    let outcome = engine.role_similarity("EMP001")?;
    let gap = engine.skill_gaps("EMP001", "JR004")?;
    assert_eq!(
        gap.similarity_percentage,
        outcome.get("JR004").map(|r| r.percentage)
    );
    assert_eq!(gap.target_role, "Data Strategy Officer");
    assert_eq!(gap.matching_skills, vec!["sql"]);
    assert_eq!(gap.skill_gaps, vec!["data governance", "strategy"]);
    Ok(())
}

#[test]
fn unknown_ids_are_reported() {
    let engine = hashing_config().build_inference(workforce()).unwrap();
    assert!(matches!(
        engine.top_recommendations("EMP404", 3),
        Err(PipelineError::UnknownEmployee(_))
    ));
    assert!(matches!(
        engine.skill_gaps("EMP001", "JR404"),
        Err(PipelineError::UnknownRole(_))
    ));
}
