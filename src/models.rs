use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value {value:?}, expected one of: {expected}")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// A closed enumeration used as a categorical record field.
pub trait Category: Copy + Eq + Sized + 'static {
    const KIND: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Result<Self, ParseCategoryError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| ParseCategoryError {
                kind: Self::KIND,
                value: value.to_string(),
                expected: Self::VARIANTS
                    .iter()
                    .map(|variant| variant.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

macro_rules! category {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $crate::models::Category for $name {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::models::Category::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::models::ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::models::Category>::parse(s)
            }
        }
    };
}

pub(crate) use category;

/// Variant order is the severity ranking: `Critical` sorts highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

category!(Severity, "severity", {
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Critical => "critical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryStatus {
    Recovering,
    Monitoring,
    RestRequired,
    Cleared,
    UnderAssessment,
}

category!(RecoveryStatus, "status", {
    Recovering => "recovering",
    Monitoring => "monitoring",
    RestRequired => "rest-required",
    Cleared => "cleared",
    UnderAssessment => "under-assessment",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestUnit {
    Days,
    Weeks,
}

category!(RestUnit, "rest unit", {
    Days => "days",
    Weeks => "weeks",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryStatus {
    Fit,
    Minor,
    Major,
}

category!(InjuryStatus, "injury status", {
    Fit => "fit",
    Minor => "minor",
    Major => "major",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwingStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

category!(SwingStatus, "swing status", {
    Excellent => "excellent",
    Good => "good",
    NeedsImprovement => "needs-improvement",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReport {
    pub id: u32,
    pub player: String,
    pub player_id: u32,
    pub injury_type: String,
    pub body_part: String,
    pub severity: Severity,
    pub status: RecoveryStatus,
    pub date_reported: NaiveDate,
    pub rest_duration: u32,
    pub rest_unit: RestUnit,
    pub expected_return: NaiveDate,
    pub medical_notes: String,
    pub treatment_plan: String,
    pub doctor_assigned: String,
    pub last_updated: NaiveDate,
    pub sessions_completed: u32,
    pub total_sessions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub batting_style: String,
    pub age: u32,
    pub matches_played: u32,
    pub avg_score: u32,
    pub bat_speed: u32,
    pub consistency: u32,
    pub form: u32,
    pub injury_status: InjuryStatus,
    pub join_date: NaiveDate,
    pub email: String,
    pub phone: String,
}

/// Form input for a roster addition; unset fields take the roster defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub name: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingEntry {
    pub id: u32,
    pub player: String,
    pub date: NaiveDate,
    pub shot_type: String,
    pub score: u32,
    pub status: SwingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingMetrics {
    pub bat_speed: u32,
    pub backlift_angle: u32,
    pub elbow_position: u32,
    pub weight_transfer: u32,
    pub follow_through: u32,
    pub timing: u32,
    pub balance: u32,
    pub head_position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingMetrics {
    pub ball_speed: u32,
    pub arm_angle: u32,
    pub elbow_extension: u32,
    pub release_point: u32,
    pub follow_through: u32,
    pub runup_speed: u32,
    pub balance: u32,
    pub landing_position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum AnalysisResult {
    Swing {
        overall_score: u32,
        metrics: SwingMetrics,
        strengths: Vec<String>,
        improvements: Vec<String>,
        shot_type: String,
        stance: String,
    },
    Bowling {
        overall_score: u32,
        metrics: BowlingMetrics,
        strengths: Vec<String>,
        improvements: Vec<String>,
        delivery_type: String,
        bowling_action: String,
        bowling_arm: String,
    },
}

impl AnalysisResult {
    pub fn overall_score(&self) -> u32 {
        match self {
            AnalysisResult::Swing { overall_score, .. }
            | AnalysisResult::Bowling { overall_score, .. } => *overall_score,
        }
    }

    /// Radar chart axes, in display order.
    pub fn metric_axes(&self) -> Vec<(&'static str, u32)> {
        match self {
            AnalysisResult::Swing { metrics, .. } => vec![
                ("Bat Speed", metrics.bat_speed),
                ("Backlift", metrics.backlift_angle),
                ("Elbow", metrics.elbow_position),
                ("Weight Transfer", metrics.weight_transfer),
                ("Follow Through", metrics.follow_through),
                ("Timing", metrics.timing),
                ("Balance", metrics.balance),
                ("Head Position", metrics.head_position),
            ],
            AnalysisResult::Bowling { metrics, .. } => vec![
                ("Ball Speed", metrics.ball_speed),
                ("Arm Angle", metrics.arm_angle),
                ("Elbow Extension", metrics.elbow_extension),
                ("Release Point", metrics.release_point),
                ("Follow Through", metrics.follow_through),
                ("Run-up Speed", metrics.runup_speed),
                ("Balance", metrics.balance),
                ("Landing", metrics.landing_position),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_critical_highest() {
        let mut values = vec![
            Severity::Moderate,
            Severity::Critical,
            Severity::Low,
            Severity::High,
        ];
        values.sort();
        assert_eq!(
            values,
            vec![Severity::Low, Severity::Moderate, Severity::High, Severity::Critical]
        );
    }

    #[test]
    fn parses_kebab_case_values() {
        assert_eq!("rest-required".parse::<RecoveryStatus>(), Ok(RecoveryStatus::RestRequired));
        assert_eq!("needs-improvement".parse::<SwingStatus>(), Ok(SwingStatus::NeedsImprovement));
        assert_eq!(RecoveryStatus::UnderAssessment.to_string(), "under-assessment");
    }

    #[test]
    fn category_values_are_case_sensitive() {
        let err = "High".parse::<Severity>().unwrap_err();
        assert_eq!(err.kind, "severity");
        assert_eq!(err.expected, "low, moderate, high, critical");
    }

    #[test]
    fn display_matches_serde_spelling() {
        for status in RecoveryStatus::VARIANTS {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
