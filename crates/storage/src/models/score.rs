use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Granularity of every criterion value (0.05).
pub fn score_step() -> Decimal {
    Decimal::new(5, 2)
}

/// Maximum attainable total across the five criteria (17.00).
pub fn max_total_score() -> Decimal {
    Decimal::new(17, 0)
}

/// The five fixed judging criteria with their value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Color,
    Clarity,
    Typicality,
    Aroma,
    Taste,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Color,
        Criterion::Clarity,
        Criterion::Typicality,
        Criterion::Aroma,
        Criterion::Taste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Clarity => "clarity",
            Self::Typicality => "typicality",
            Self::Aroma => "aroma",
            Self::Taste => "taste",
        }
    }

    pub fn min(&self) -> Decimal {
        Decimal::ZERO
    }

    pub fn max(&self) -> Decimal {
        match self {
            Self::Color | Self::Clarity => Decimal::ONE,
            Self::Typicality => Decimal::TWO,
            Self::Aroma => Decimal::new(5, 0),
            Self::Taste => Decimal::new(8, 0),
        }
    }

    /// Starting value presented to a judge before any input.
    pub fn default_value(&self) -> Decimal {
        match self {
            Self::Color | Self::Clarity => Decimal::new(5, 1),
            Self::Typicality => Decimal::ONE,
            Self::Aroma => Decimal::new(25, 1),
            Self::Taste => Decimal::new(4, 0),
        }
    }
}

/// The five criterion values of a single score, validated as a unit before
/// any write is attempted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ScoreCriteria {
    pub color: Decimal,
    pub clarity: Decimal,
    pub typicality: Decimal,
    pub aroma: Decimal,
    pub taste: Decimal,
}

impl ScoreCriteria {
    pub fn get(&self, criterion: Criterion) -> Decimal {
        match criterion {
            Criterion::Color => self.color,
            Criterion::Clarity => self.clarity,
            Criterion::Typicality => self.typicality,
            Criterion::Aroma => self.aroma,
            Criterion::Taste => self.taste,
        }
    }

    pub fn total(&self) -> Decimal {
        self.color + self.clarity + self.typicality + self.aroma + self.taste
    }

    /// Rejects values outside a criterion's [min, max] range or off the
    /// 0.05 step grid. Out-of-range input is an error, never clamped.
    pub fn validate(&self) -> Result<(), String> {
        let step = score_step();

        for criterion in Criterion::ALL {
            let value = self.get(criterion);

            if value < criterion.min() || value > criterion.max() {
                return Err(format!(
                    "{} must be between {} and {}",
                    criterion.as_str(),
                    criterion.min(),
                    criterion.max()
                ));
            }

            if !(value % step).is_zero() {
                return Err(format!(
                    "{} must be a multiple of {}",
                    criterion.as_str(),
                    step
                ));
            }
        }

        Ok(())
    }
}

/// One judge's criterion ratings for one sample, keyed by
/// (judge_id, sample_id). `scored_at` is set on first save and never
/// overwritten; `updated_at` is refreshed on every save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub judge_id: Uuid,
    pub sample_id: Uuid,
    pub color: Decimal,
    pub clarity: Decimal,
    pub typicality: Decimal,
    pub aroma: Decimal,
    pub taste: Decimal,
    pub comment: String,
    pub scored_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Score {
    pub fn criteria(&self) -> ScoreCriteria {
        ScoreCriteria {
            color: self.color,
            clarity: self.clarity,
            typicality: self.typicality,
            aroma: self.aroma,
            taste: self.taste,
        }
    }

    pub fn total(&self) -> Decimal {
        self.criteria().total()
    }

    /// Total rounded to 2 decimal places for display; stored components
    /// stay exact.
    pub fn display_total(&self) -> Decimal {
        self.total().round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(color: &str, clarity: &str, typicality: &str, aroma: &str, taste: &str) -> ScoreCriteria {
        ScoreCriteria {
            color: color.parse().unwrap(),
            clarity: clarity.parse().unwrap(),
            typicality: typicality.parse().unwrap(),
            aroma: aroma.parse().unwrap(),
            taste: taste.parse().unwrap(),
        }
    }

    #[test]
    fn test_maximum_criteria_reach_max_total() {
        let maxed = criteria("1", "1", "2", "5", "8");
        assert!(maxed.validate().is_ok());
        assert_eq!(maxed.total(), max_total_score());
    }

    #[test]
    fn test_defaults_are_valid() {
        let defaults = ScoreCriteria {
            color: Criterion::Color.default_value(),
            clarity: Criterion::Clarity.default_value(),
            typicality: Criterion::Typicality.default_value(),
            aroma: Criterion::Aroma.default_value(),
            taste: Criterion::Taste.default_value(),
        };
        assert!(defaults.validate().is_ok());
        assert_eq!(defaults.total(), "8.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_value_above_max_rejected() {
        let too_high = criteria("1.05", "0.5", "1", "2.5", "4");
        let err = too_high.validate().unwrap_err();
        assert!(err.contains("color"));
    }

    #[test]
    fn test_negative_value_rejected() {
        let negative = criteria("0.5", "-0.05", "1", "2.5", "4");
        let err = negative.validate().unwrap_err();
        assert!(err.contains("clarity"));
    }

    #[test]
    fn test_off_step_value_rejected() {
        let off_grid = criteria("0.5", "0.5", "1", "2.52", "4");
        let err = off_grid.validate().unwrap_err();
        assert!(err.contains("aroma"));
        assert!(err.contains("multiple"));
    }

    #[test]
    fn test_step_boundaries_accepted() {
        assert!(criteria("0", "0", "0", "0", "0").validate().is_ok());
        assert!(criteria("0.05", "0.95", "1.95", "4.95", "7.95").validate().is_ok());
    }

    #[test]
    fn test_display_total_rounds_to_two_decimals() {
        let score = Score {
            judge_id: Uuid::new_v4(),
            sample_id: Uuid::new_v4(),
            color: "0.5".parse().unwrap(),
            clarity: "0.5".parse().unwrap(),
            typicality: "1".parse().unwrap(),
            aroma: "2.5".parse().unwrap(),
            taste: "4.05".parse().unwrap(),
            comment: String::new(),
            scored_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        };
        assert_eq!(score.display_total(), "8.55".parse::<Decimal>().unwrap());
    }
}
