use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::results::{CategoryResult, EventResultsResponse, SampleResult, ScoreEntry};
use crate::error::Result;
use crate::models::{Category, JudgeAssignment, Producer, Sample, Score, User};
use crate::repository::assignment::AssignmentRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::event::EventRepository;
use crate::repository::producer::ProducerRepository;
use crate::repository::sample::SampleRepository;
use crate::repository::score::ScoreRepository;
use crate::repository::user::UserRepository;

/// Rendered in place of a producer or judge name that cannot be resolved.
const UNRESOLVED_NAME: &str = "—";

/// Load the full results view for an event.
///
/// Fetches one snapshot of each constituent collection (samples and scores
/// through the chunked id-set queries) and hands them to the pure
/// aggregation below. The joins are only as consistent as the individual
/// snapshots; results are best effort as of this call.
pub async fn event_results(pool: &PgPool, event_id: Uuid) -> Result<EventResultsResponse> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;

    let categories = CategoryRepository::new(pool)
        .list_for_event(event_id)
        .await?;
    let category_ids: Vec<Uuid> = categories.iter().map(|c| c.category_id).collect();

    let samples = SampleRepository::new(pool)
        .list_for_categories(&category_ids)
        .await?;
    let sample_ids: Vec<Uuid> = samples.iter().map(|s| s.sample_id).collect();

    let scores = ScoreRepository::new(pool)
        .list_for_sample_ids(&sample_ids)
        .await?;
    let assignments = AssignmentRepository::new(pool)
        .list_for_categories(&category_ids)
        .await?;
    let producers = ProducerRepository::new(pool).list().await?;
    let users = UserRepository::new(pool).list().await?;

    let results =
        aggregate_event_results(&categories, &samples, &scores, &assignments, &producers, &users);

    Ok(EventResultsResponse {
        event: event.into(),
        categories: results,
    })
}

/// Combine one snapshot of categories, samples, scores, assignments and the
/// producer/user directories into ranked per-category results.
///
/// Per sample, each criterion is averaged over the judges who scored it
/// (divisor `max(1, n)`, so an unscored sample averages to zero), and the
/// average total is the sum of the five criterion averages. Samples are
/// ranked by average total descending with a stable sort: tied samples keep
/// their incoming display order. Never writes anything.
pub fn aggregate_event_results(
    categories: &[Category],
    samples: &[Sample],
    scores: &[Score],
    assignments: &[JudgeAssignment],
    producers: &[Producer],
    users: &[User],
) -> Vec<CategoryResult> {
    let producer_names: HashMap<Uuid, &str> = producers
        .iter()
        .map(|p| (p.producer_id, p.name.as_str()))
        .collect();

    let judge_names: HashMap<Uuid, &str> = users
        .iter()
        .map(|u| (u.user_id, u.username.as_str()))
        .collect();

    let mut scores_by_sample: HashMap<Uuid, Vec<&Score>> = HashMap::new();
    for score in scores {
        scores_by_sample.entry(score.sample_id).or_default().push(score);
    }

    categories
        .iter()
        .map(|category| {
            let total_judges = assignments
                .iter()
                .filter(|a| a.category_id == category.category_id)
                .count() as i64;

            let mut ranked: Vec<(Decimal, SampleResult)> = samples
                .iter()
                .filter(|s| s.category_id == category.category_id)
                .map(|sample| {
                    sample_result(sample, &scores_by_sample, &producer_names, &judge_names, total_judges)
                })
                .collect();

            // Stable: ties keep their display order.
            ranked.sort_by(|a, b| b.0.cmp(&a.0));

            let mut locked_judge_ids: Vec<Uuid> = assignments
                .iter()
                .filter(|a| a.category_id == category.category_id && a.is_finished())
                .map(|a| a.judge_id)
                .collect();
            locked_judge_ids.sort();

            CategoryResult {
                category_id: category.category_id,
                name: category.name.clone(),
                samples: ranked.into_iter().map(|(_, result)| result).collect(),
                locked_judge_ids,
            }
        })
        .collect()
}

/// Aggregate one sample's scores; returns the exact average total used for
/// ranking alongside the rounded result row.
fn sample_result(
    sample: &Sample,
    scores_by_sample: &HashMap<Uuid, Vec<&Score>>,
    producer_names: &HashMap<Uuid, &str>,
    judge_names: &HashMap<Uuid, &str>,
    total_judges: i64,
) -> (Decimal, SampleResult) {
    let judge_scores: &[&Score] = scores_by_sample
        .get(&sample.sample_id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let divisor = Decimal::from(judge_scores.len().max(1));
    let avg = |field: fn(&Score) -> Decimal| {
        judge_scores.iter().map(|s| field(s)).sum::<Decimal>() / divisor
    };

    let avg_color = avg(|s| s.color);
    let avg_clarity = avg(|s| s.clarity);
    let avg_typicality = avg(|s| s.typicality);
    let avg_aroma = avg(|s| s.aroma);
    let avg_taste = avg(|s| s.taste);
    let avg_total = avg_color + avg_clarity + avg_typicality + avg_aroma + avg_taste;

    let entries = judge_scores
        .iter()
        .map(|score| ScoreEntry {
            judge_id: score.judge_id,
            judge_name: judge_names
                .get(&score.judge_id)
                .copied()
                .unwrap_or(UNRESOLVED_NAME)
                .to_string(),
            color: score.color,
            clarity: score.clarity,
            typicality: score.typicality,
            aroma: score.aroma,
            taste: score.taste,
            total: score.display_total(),
            comment: score.comment.clone(),
        })
        .collect();

    let result = SampleResult {
        sample_id: sample.sample_id,
        sample_code: sample.sample_code.clone(),
        year: sample.year,
        alcohol_strength: sample.alcohol_strength,
        producer_name: producer_names
            .get(&sample.producer_id)
            .copied()
            .unwrap_or(UNRESOLVED_NAME)
            .to_string(),
        avg_color: avg_color.round_dp(2),
        avg_clarity: avg_clarity.round_dp(2),
        avg_typicality: avg_typicality.round_dp(2),
        avg_aroma: avg_aroma.round_dp(2),
        avg_taste: avg_taste.round_dp(2),
        avg_total: avg_total.round_dp(2),
        judges_scored: judge_scores.len() as i64,
        total_judges,
        scores: entries,
    };

    (avg_total, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ASSIGNMENT_ACTIVE, ASSIGNMENT_FINISHED};
    use chrono::NaiveDateTime;

    fn ts() -> NaiveDateTime {
        chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc()
    }

    fn category(name: &str) -> Category {
        Category {
            category_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: name.to_string(),
            status: "active".to_string(),
            created_at: ts(),
        }
    }

    fn sample(category_id: Uuid, producer_id: Uuid, code: &str, order: i32) -> Sample {
        Sample {
            sample_id: Uuid::new_v4(),
            producer_id,
            category_id,
            sample_code: code.to_string(),
            year: 2025,
            alcohol_strength: "42.5".parse().unwrap(),
            display_order: order,
            created_at: ts(),
        }
    }

    fn score(judge_id: Uuid, sample_id: Uuid, values: [&str; 5]) -> Score {
        Score {
            judge_id,
            sample_id,
            color: values[0].parse().unwrap(),
            clarity: values[1].parse().unwrap(),
            typicality: values[2].parse().unwrap(),
            aroma: values[3].parse().unwrap(),
            taste: values[4].parse().unwrap(),
            comment: String::new(),
            scored_at: ts(),
            updated_at: ts(),
        }
    }

    fn assignment(judge_id: Uuid, category_id: Uuid, status: &str) -> JudgeAssignment {
        JudgeAssignment {
            judge_id,
            category_id,
            status: status.to_string(),
        }
    }

    fn producer(name: &str) -> Producer {
        Producer {
            producer_id: Uuid::new_v4(),
            name: name.to_string(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            region: String::new(),
            country: String::new(),
            created_at: ts(),
        }
    }

    fn user(username: &str) -> User {
        User {
            user_id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role: "judge".to_string(),
            created_at: ts(),
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_averages_across_judges() {
        let cat = category("Plum");
        let prod = producer("Podrum Sever");
        let s1 = sample(cat.category_id, prod.producer_id, "A-01", 1);

        let (j1, j2) = (user("ana"), user("boris"));
        let scores = vec![
            // totals 10 and 12
            score(j1.user_id, s1.sample_id, ["1", "1", "2", "2", "4"]),
            score(j2.user_id, s1.sample_id, ["1", "1", "2", "4", "4"]),
        ];
        let assignments = vec![
            assignment(j1.user_id, cat.category_id, ASSIGNMENT_ACTIVE),
            assignment(j2.user_id, cat.category_id, ASSIGNMENT_ACTIVE),
        ];

        let results = aggregate_event_results(
            &[cat],
            &[s1],
            &scores,
            &assignments,
            &[prod],
            &[j1, j2],
        );

        assert_eq!(results.len(), 1);
        let row = &results[0].samples[0];
        assert_eq!(row.avg_total, dec("11"));
        assert_eq!(row.avg_aroma, dec("3"));
        assert_eq!(row.judges_scored, 2);
        assert_eq!(row.total_judges, 2);
        assert_eq!(row.producer_name, "Podrum Sever");
        assert_eq!(row.scores.len(), 2);
    }

    #[test]
    fn test_unscored_sample_averages_to_zero() {
        let cat = category("Quince");
        let prod = producer("Stari Sad");
        let s1 = sample(cat.category_id, prod.producer_id, "B-01", 1);

        let results = aggregate_event_results(&[cat], &[s1], &[], &[], &[prod], &[]);

        let row = &results[0].samples[0];
        assert_eq!(row.avg_total, Decimal::ZERO);
        assert_eq!(row.avg_taste, Decimal::ZERO);
        assert_eq!(row.judges_scored, 0);
        assert!(row.scores.is_empty());
    }

    #[test]
    fn test_ranking_descends_and_preserves_order_for_ties() {
        let cat = category("Apricot");
        let prod = producer("Voćar");
        let judge = user("ceda");

        let low_first = sample(cat.category_id, prod.producer_id, "C-01", 1);
        let low_second = sample(cat.category_id, prod.producer_id, "C-02", 2);
        let high = sample(cat.category_id, prod.producer_id, "C-03", 3);

        let scores = vec![
            score(judge.user_id, low_first.sample_id, ["0.5", "0.5", "1", "1", "2"]),
            score(judge.user_id, low_second.sample_id, ["0.5", "0.5", "1", "1", "2"]),
            score(judge.user_id, high.sample_id, ["1", "1", "2", "4", "6"]),
        ];

        let results = aggregate_event_results(
            &[cat],
            &[low_first.clone(), low_second.clone(), high.clone()],
            &scores,
            &[],
            &[prod],
            &[judge],
        );

        let codes: Vec<&str> = results[0]
            .samples
            .iter()
            .map(|s| s.sample_code.as_str())
            .collect();
        assert_eq!(codes, vec!["C-03", "C-01", "C-02"]);
    }

    #[test]
    fn test_total_judges_counts_all_statuses_and_locked_set_only_finished() {
        let cat = category("Pear");
        let (j1, j2, j3) = (user("dara"), user("emil"), user("filip"));

        let assignments = vec![
            assignment(j1.user_id, cat.category_id, ASSIGNMENT_ACTIVE),
            assignment(j2.user_id, cat.category_id, ASSIGNMENT_FINISHED),
            assignment(j3.user_id, cat.category_id, ASSIGNMENT_FINISHED),
        ];
        let prod = producer("Zlatna Dolina");
        let s1 = sample(cat.category_id, prod.producer_id, "D-01", 1);

        let results = aggregate_event_results(
            &[cat],
            &[s1],
            &[],
            &assignments,
            &[prod],
            &[j1.clone(), j2.clone(), j3.clone()],
        );

        assert_eq!(results[0].samples[0].total_judges, 3);
        let mut expected = vec![j2.user_id, j3.user_id];
        expected.sort();
        assert_eq!(results[0].locked_judge_ids, expected);
    }

    #[test]
    fn test_unresolved_names_render_placeholder() {
        let cat = category("Grape");
        let s1 = sample(cat.category_id, Uuid::new_v4(), "E-01", 1);
        let orphan_judge = Uuid::new_v4();
        let scores = vec![score(orphan_judge, s1.sample_id, ["1", "1", "2", "4", "6"])];

        let results = aggregate_event_results(&[cat], &[s1], &scores, &[], &[], &[]);

        let row = &results[0].samples[0];
        assert_eq!(row.producer_name, "—");
        assert_eq!(row.scores[0].judge_name, "—");
    }

    #[test]
    fn test_samples_stay_within_their_category() {
        let cat_a = category("Plum");
        let cat_b = category("Quince");
        let prod = producer("Breg");

        let in_a = sample(cat_a.category_id, prod.producer_id, "F-01", 1);
        let in_b = sample(cat_b.category_id, prod.producer_id, "F-02", 1);

        let results = aggregate_event_results(
            &[cat_a.clone(), cat_b.clone()],
            &[in_a, in_b],
            &[],
            &[],
            &[prod],
            &[],
        );

        assert_eq!(results[0].samples.len(), 1);
        assert_eq!(results[0].samples[0].sample_code, "F-01");
        assert_eq!(results[1].samples.len(), 1);
        assert_eq!(results[1].samples[0].sample_code, "F-02");
    }

    #[test]
    fn test_averages_round_to_two_decimals() {
        let cat = category("Cherry");
        let prod = producer("Kula");
        let s1 = sample(cat.category_id, prod.producer_id, "G-01", 1);

        let (j1, j2, j3) = (user("g1"), user("g2"), user("g3"));
        // Three judges, taste 4 + 4 + 4.05: average is 4.016..., shown as 4.02.
        let scores = vec![
            score(j1.user_id, s1.sample_id, ["0.5", "0.5", "1", "2.5", "4"]),
            score(j2.user_id, s1.sample_id, ["0.5", "0.5", "1", "2.5", "4"]),
            score(j3.user_id, s1.sample_id, ["0.5", "0.5", "1", "2.5", "4.05"]),
        ];

        let results =
            aggregate_event_results(&[cat], &[s1], &scores, &[], &[prod], &[j1, j2, j3]);

        assert_eq!(results[0].samples[0].avg_taste, dec("4.02"));
    }
}
