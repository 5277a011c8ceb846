//! Simulated video analysis.
//!
//! No frames are processed: a job waits for the configured delay and then
//! yields a fixed result. The wait is cancellable so a caller tearing down
//! mid-analysis never receives a late result.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{category, AnalysisResult, BowlingMetrics, SwingMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Swing,
    Bowling,
}

category!(AnalysisKind, "analysis kind", {
    Swing => "swing",
    Bowling => "bowling",
});

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Complete(AnalysisResult),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub run_id: Uuid,
    pub kind: AnalysisKind,
    pub delay: Duration,
}

impl AnalysisJob {
    pub fn new(kind: AnalysisKind, delay: Duration) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            kind,
            delay,
        }
    }

    pub async fn run(self, cancel: CancellationToken) -> AnalysisOutcome {
        info!(
            run_id = %self.run_id,
            kind = %self.kind,
            delay_ms = self.delay.as_millis() as u64,
            "analysis started"
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                info!(run_id = %self.run_id, "analysis cancelled");
                AnalysisOutcome::Cancelled
            }
            _ = tokio::time::sleep(self.delay) => {
                let result = mock_result(self.kind);
                debug!(
                    run_id = %self.run_id,
                    score = result.overall_score(),
                    "analysis produced result"
                );
                info!(run_id = %self.run_id, "analysis complete");
                AnalysisOutcome::Complete(result)
            }
        }
    }
}

pub fn mock_result(kind: AnalysisKind) -> AnalysisResult {
    let lines = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    match kind {
        AnalysisKind::Swing => AnalysisResult::Swing {
            overall_score: 87,
            metrics: SwingMetrics {
                bat_speed: 92,
                backlift_angle: 85,
                elbow_position: 78,
                weight_transfer: 90,
                follow_through: 88,
                timing: 82,
                balance: 85,
                head_position: 90,
            },
            strengths: lines(&[
                "Excellent bat speed generation",
                "Perfect head position throughout the shot",
                "Great weight transfer from back to front foot",
                "Smooth follow-through completion",
            ]),
            improvements: lines(&[
                "Elbow could be slightly higher during backlift",
                "Timing can be improved for better shot placement",
                "Consider adjusting stance width for better balance",
            ]),
            shot_type: "Front Foot Drive".to_string(),
            stance: "Side-on".to_string(),
        },
        AnalysisKind::Bowling => AnalysisResult::Bowling {
            overall_score: 85,
            metrics: BowlingMetrics {
                ball_speed: 88,
                arm_angle: 82,
                elbow_extension: 75,
                release_point: 86,
                follow_through: 84,
                runup_speed: 80,
                balance: 82,
                landing_position: 88,
            },
            strengths: lines(&[
                "Excellent release point consistency",
                "Strong follow-through completion",
                "Good landing position near crease",
                "Consistent run-up rhythm",
            ]),
            improvements: lines(&[
                "Elbow extension needs monitoring for no-ball compliance",
                "Arm angle could be more consistent",
                "Balance during delivery stride can be improved",
            ]),
            delivery_type: "Good Length".to_string(),
            bowling_action: "Side-on".to_string(),
            bowling_arm: "Right-arm".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let job = AnalysisJob::new(AnalysisKind::Swing, Duration::from_millis(3000));
        let started = tokio::time::Instant::now();
        let outcome = job.run(CancellationToken::new()).await;

        assert!(started.elapsed() >= Duration::from_millis(3000));
        match outcome {
            AnalysisOutcome::Complete(result) => assert_eq!(result.overall_score(), 87),
            AnalysisOutcome::Cancelled => panic!("job should have completed"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_before_delay_yields_no_result() {
        let cancel = CancellationToken::new();
        let job = AnalysisJob::new(AnalysisKind::Bowling, Duration::from_secs(3));
        let handle = tokio::spawn(job.run(cancel.clone()));

        tokio::time::sleep(Duration::from_millis(500)).await;
        cancel.cancel();

        assert_eq!(handle.await.unwrap(), AnalysisOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn pre_cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let job = AnalysisJob::new(AnalysisKind::Swing, Duration::from_secs(60));
        assert_eq!(job.run(cancel).await, AnalysisOutcome::Cancelled);
    }

    #[test]
    fn mock_results_expose_eight_axes() {
        let bowling = mock_result(AnalysisKind::Bowling);
        let axes = bowling.metric_axes();
        assert_eq!(axes.len(), 8);
        assert_eq!(axes[0], ("Ball Speed", 88));
        assert_eq!(mock_result(AnalysisKind::Swing).metric_axes()[7], ("Head Position", 90));
    }

    #[test]
    fn kind_parses_from_cli_value() {
        assert_eq!("bowling".parse::<AnalysisKind>(), Ok(AnalysisKind::Bowling));
        assert!("batting".parse::<AnalysisKind>().is_err());
        assert_eq!(AnalysisKind::Swing.to_string(), "swing");
    }
}
