//! Scoring Engine — pure, deterministic 0–100 compatibility score over a
//! validated `CandidateRecord` and a recruiter-supplied required-skill list.
//!
//! Four additive, independently-capped components:
//! 1. Skill match        (cap 40)
//! 2. Experience match   (cap 30, target 5.0 years)
//! 3. Education bonus    (20 / 10 / 0, highest tier only)
//! 4. Completeness bonus (cap 10)
//!
//! No I/O, no side effects. Same inputs always produce the same output.

use crate::extraction::schema::CandidateRecord;

const SKILL_WEIGHT: f64 = 40.0;
const EXPERIENCE_WEIGHT: f64 = 30.0;
const TARGET_EXPERIENCE_YEARS: f64 = 5.0;

// Degree substring tiers. Matching is case-sensitive, unlike skill matching.
const MASTER_TIER: &[&str] = &["Master", "M.S.", "MS", "MBA", "PhD", "Ph.D."];
const BACHELOR_TIER: &[&str] = &["Bachelor", "B.S.", "B.Tech"];

/// Computes the compatibility score, rounded to 2 decimal places and capped
/// at 100.0.
pub fn score(record: &CandidateRecord, required_skills: &[String]) -> f64 {
    let total = skill_match_score(record, required_skills)
        + experience_score(record.total_years_experience)
        + education_bonus(&record.highest_degree)
        + completeness_bonus(record);

    round2(total.min(100.0))
}

/// Skill match, capped at 40. An empty required-skill list contributes 0
/// rather than dividing by zero. Matching is case-insensitive on trimmed
/// text and must be exact per skill.
fn skill_match_score(record: &CandidateRecord, required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let points_per_match = SKILL_WEIGHT / required_skills.len() as f64;
    let candidate_skills: Vec<String> = record
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let matched: f64 = required_skills
        .iter()
        .filter(|required| {
            let required = required.trim().to_lowercase();
            candidate_skills.iter().any(|s| *s == required)
        })
        .map(|_| points_per_match)
        .sum();

    // Rounding slack in the per-skill weights must never push past the cap
    matched.min(SKILL_WEIGHT)
}

/// Experience match, capped at 30 with a 5.0-year target. Below-target
/// candidates earn linear partial credit against 80% of the weight, so they
/// top out at 24.0 even at near-target experience.
fn experience_score(years: f64) -> f64 {
    if years >= TARGET_EXPERIENCE_YEARS {
        EXPERIENCE_WEIGHT
    } else {
        (years / TARGET_EXPERIENCE_YEARS) * (EXPERIENCE_WEIGHT * 0.8)
    }
}

/// Education bonus: 20 for a Master-tier degree, 10 for a Bachelor-tier
/// degree, 0 otherwise. Only the highest matching tier applies.
fn education_bonus(highest_degree: &str) -> f64 {
    if MASTER_TIER.iter().any(|deg| highest_degree.contains(deg)) {
        20.0
    } else if BACHELOR_TIER.iter().any(|deg| highest_degree.contains(deg)) {
        10.0
    } else {
        0.0
    }
}

/// Data completeness bonus, capped at 10 by construction: +3 name, +3 email,
/// +2 phone, +2 nonzero experience.
fn completeness_bonus(record: &CandidateRecord) -> f64 {
    let mut bonus = 0.0;
    if !record.name.is_empty() {
        bonus += 3.0;
    }
    if !record.email.is_empty() {
        bonus += 3.0;
    }
    if record.phone.as_deref().is_some_and(|p| !p.is_empty()) {
        bonus += 2.0;
    }
    if record.total_years_experience > 0.0 {
        bonus += 2.0;
    }
    bonus
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        phone: Option<&str>,
        years: f64,
        degree: &str,
        skills: &[&str],
    ) -> CandidateRecord {
        CandidateRecord {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: phone.map(String::from),
            total_years_experience: years,
            highest_degree: degree.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_worked_example_scores_84_67() {
        // skill 2/3×40 = 26.67, experience 30, education 20,
        // completeness 8 (no phone) → 84.67
        let record = make_record(None, 6.0, "M.S. in CS", &["Python", "AWS"]);
        let required = skills(&["Python", "AWS", "SQL"]);
        assert_eq!(score(&record, &required), 84.67);
    }

    #[test]
    fn test_empty_required_skills_contributes_zero_not_error() {
        let record = make_record(None, 0.0, "", &["Python"]);
        assert_eq!(skill_match_score(&record, &[]), 0.0);
    }

    #[test]
    fn test_full_skill_match_is_exactly_40() {
        let record = make_record(None, 0.0, "", &["Python", "AWS", "SQL"]);
        let required = skills(&["Python", "AWS", "SQL"]);
        assert_eq!(skill_match_score(&record, &required), 40.0);
    }

    #[test]
    fn test_skill_match_is_case_insensitive_and_trimmed() {
        let record = make_record(None, 0.0, "", &["  python ", "aws"]);
        let required = skills(&["Python", "AWS"]);
        assert_eq!(skill_match_score(&record, &required), 40.0);
    }

    #[test]
    fn test_skill_match_requires_exact_match_not_substring() {
        let record = make_record(None, 0.0, "", &["Python3"]);
        let required = skills(&["Python"]);
        assert_eq!(skill_match_score(&record, &required), 0.0);
    }

    #[test]
    fn test_skill_match_bounded_for_odd_list_lengths() {
        // 40/7 per skill, all matched: rounding slack must not exceed 40
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let record = make_record(None, 0.0, "", &names);
        let required = skills(&names);
        let component = skill_match_score(&record, &required);
        assert!(component <= 40.0);
        assert!(component > 39.99);
    }

    #[test]
    fn test_experience_at_target_earns_full_weight() {
        assert_eq!(experience_score(5.0), 30.0);
        assert_eq!(experience_score(12.0), 30.0);
    }

    #[test]
    fn test_experience_below_target_is_sublinear() {
        // years=2.5 → (2.5/5.0)×24.0 = 12.0
        assert_eq!(experience_score(2.5), 12.0);
    }

    #[test]
    fn test_experience_just_below_target_caps_at_80_percent() {
        let near = experience_score(4.999);
        assert!(near < 24.0);
        assert!(near > 23.9);
    }

    #[test]
    fn test_experience_zero_is_zero() {
        assert_eq!(experience_score(0.0), 0.0);
    }

    #[test]
    fn test_education_master_tier_awards_20() {
        for degree in ["Master of Science", "M.S. in CS", "MS", "MBA", "PhD", "Ph.D. in EE"] {
            assert_eq!(education_bonus(degree), 20.0, "degree: {degree}");
        }
    }

    #[test]
    fn test_education_bachelor_tier_awards_10() {
        for degree in ["Bachelor of Arts", "B.S. in Physics", "B.Tech in ECE"] {
            assert_eq!(education_bonus(degree), 10.0, "degree: {degree}");
        }
    }

    #[test]
    fn test_education_unknown_degree_awards_0() {
        assert_eq!(education_bonus("High School Diploma"), 0.0);
        assert_eq!(education_bonus(""), 0.0);
    }

    #[test]
    fn test_education_master_tier_dominates_bachelor_tier() {
        // Both substrings present: only the highest tier applies
        assert_eq!(education_bonus("B.Tech, then Master of Engineering"), 20.0);
    }

    #[test]
    fn test_education_matching_is_case_sensitive() {
        assert_eq!(education_bonus("master of science"), 0.0);
        assert_eq!(education_bonus("bachelor of arts"), 0.0);
    }

    #[test]
    fn test_completeness_full_record_earns_10() {
        let record = make_record(Some("+1 555 0100"), 3.0, "", &[]);
        assert_eq!(completeness_bonus(&record), 10.0);
    }

    #[test]
    fn test_completeness_missing_phone_and_experience() {
        let record = make_record(None, 0.0, "", &[]);
        assert_eq!(completeness_bonus(&record), 6.0);
    }

    #[test]
    fn test_completeness_empty_phone_earns_nothing() {
        let record = make_record(Some(""), 0.0, "", &[]);
        assert_eq!(completeness_bonus(&record), 6.0);
    }

    #[test]
    fn test_score_is_bounded_and_deterministic() {
        let record = make_record(Some("+1 555 0100"), 20.0, "Ph.D.", &["Rust", "SQL"]);
        let required = skills(&["Rust", "SQL"]);
        let first = score(&record, &required);
        assert!((0.0..=100.0).contains(&first));
        assert_eq!(first, score(&record, &required));
    }

    #[test]
    fn test_maximum_realistic_score_is_100() {
        let record = make_record(Some("+1 555 0100"), 10.0, "Ph.D.", &["Rust"]);
        let required = skills(&["Rust"]);
        // 40 + 30 + 20 + 10 = 100
        assert_eq!(score(&record, &required), 100.0);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        // 1/3 of 40 = 13.333... → component sum rounds at the end
        let record = make_record(None, 0.0, "", &["Python"]);
        let required = skills(&["Python", "AWS", "SQL"]);
        // skill 13.33… + completeness 6 = 19.33
        assert_eq!(score(&record, &required), 19.33);
    }

    #[test]
    fn test_empty_skill_list_on_record_scores_zero_skill_component() {
        let record = make_record(None, 0.0, "", &[]);
        let required = skills(&["Python"]);
        assert_eq!(skill_match_score(&record, &required), 0.0);
    }
}
