use serde::Serialize;

use crate::models::{InjuryStatus, MedicalReport, Player, RecoveryStatus, SwingEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub total: usize,
    pub active: usize,
    pub recovering: usize,
    pub cleared: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total_players: usize,
    pub fit_players: usize,
    pub avg_bat_speed: Option<u32>,
    pub avg_consistency: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadAverages {
    pub bat_speed: Option<u32>,
    pub consistency: Option<u32>,
    pub form: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingStats {
    pub total: usize,
    pub avg_score: Option<u32>,
    pub best_score: Option<u32>,
}

/// Mean of `values` rounded for display; `None` for an empty input.
pub fn rounded_mean<I>(values: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), value| (sum + u64::from(value), count + 1));

    if count == 0 {
        None
    } else {
        Some((sum as f64 / count as f64).round() as u32)
    }
}

pub fn report_stats(reports: &[MedicalReport]) -> ReportStats {
    let count = |status: RecoveryStatus| reports.iter().filter(|r| r.status == status).count();

    ReportStats {
        total: reports.len(),
        active: reports
            .iter()
            .filter(|r| r.status != RecoveryStatus::Cleared)
            .count(),
        recovering: count(RecoveryStatus::Recovering),
        cleared: count(RecoveryStatus::Cleared),
    }
}

/// Completed rehab sessions as a whole percentage.
pub fn recovery_progress(report: &MedicalReport) -> u32 {
    if report.total_sessions == 0 {
        return 0;
    }
    (f64::from(report.sessions_completed) / f64::from(report.total_sessions) * 100.0).round() as u32
}

pub fn overall_rating(player: &Player) -> u32 {
    let total = player.bat_speed + player.consistency + player.form;
    (f64::from(total) / 3.0).round() as u32
}

pub fn fitness_score(status: InjuryStatus) -> u32 {
    match status {
        InjuryStatus::Fit => 95,
        InjuryStatus::Minor => 70,
        InjuryStatus::Major => 50,
    }
}

/// Profile radar axes, in display order. Experience saturates at 100.
pub fn profile_axes(player: &Player) -> Vec<(&'static str, u32)> {
    vec![
        ("Bat Speed", player.bat_speed),
        ("Consistency", player.consistency),
        ("Form", player.form),
        ("Experience", player.matches_played.saturating_mul(3).min(100)),
        ("Fitness", fitness_score(player.injury_status)),
        ("Technique", player.avg_score),
    ]
}

pub fn roster_stats(players: &[Player]) -> RosterStats {
    RosterStats {
        total_players: players.len(),
        fit_players: players
            .iter()
            .filter(|p| p.injury_status == InjuryStatus::Fit)
            .count(),
        avg_bat_speed: rounded_mean(players.iter().map(|p| p.bat_speed)),
        avg_consistency: rounded_mean(players.iter().map(|p| p.consistency)),
    }
}

pub fn squad_averages(players: &[Player]) -> SquadAverages {
    SquadAverages {
        bat_speed: rounded_mean(players.iter().map(|p| p.bat_speed)),
        consistency: rounded_mean(players.iter().map(|p| p.consistency)),
        form: rounded_mean(players.iter().map(|p| p.form)),
    }
}

pub fn swing_stats(swings: &[SwingEntry]) -> SwingStats {
    SwingStats {
        total: swings.len(),
        avg_score: rounded_mean(swings.iter().map(|s| s.score)),
        best_score: swings.iter().map(|s| s.score).max(),
    }
}

pub fn display_value(value: Option<u32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn report_stats_count_over_full_collection() {
        let reports = seed::medical_reports().unwrap();
        assert_eq!(
            report_stats(&reports),
            ReportStats {
                total: 6,
                active: 4,
                recovering: 2,
                cleared: 2,
            }
        );
    }

    #[test]
    fn recovery_progress_rounds_to_whole_percent() {
        let reports = seed::medical_reports().unwrap();
        let progress: Vec<_> = reports.iter().map(recovery_progress).collect();
        assert_eq!(progress, vec![25, 33, 13, 60, 100, 100]);

        let mut empty_plan = reports[0].clone();
        empty_plan.total_sessions = 0;
        assert_eq!(recovery_progress(&empty_plan), 0);
    }

    #[test]
    fn overall_rating_rounds_half_up() {
        let players = seed::players().unwrap();
        let ratings: Vec<_> = players.iter().map(overall_rating).collect();
        assert_eq!(ratings, vec![90, 90, 85, 84, 87, 89]);
    }

    #[test]
    fn profile_axes_follow_player_metrics() {
        let players = seed::players().unwrap();
        let rohit = &players[0];
        assert_eq!(
            profile_axes(rohit),
            vec![
                ("Bat Speed", 92),
                ("Consistency", 88),
                ("Form", 90),
                ("Experience", 72),
                ("Fitness", 95),
                ("Technique", 88),
            ]
        );
    }

    #[test]
    fn experience_caps_at_one_hundred() {
        let mut player = seed::players().unwrap().remove(0);
        let experience = |p: &Player| profile_axes(p)[3].1;

        player.matches_played = 33;
        assert_eq!(experience(&player), 99);
        player.matches_played = 34;
        assert_eq!(experience(&player), 100);
        player.matches_played = 250;
        assert_eq!(experience(&player), 100);
        player.matches_played = 0;
        assert_eq!(experience(&player), 0);
    }

    #[test]
    fn fitness_maps_each_injury_status() {
        assert_eq!(fitness_score(InjuryStatus::Fit), 95);
        assert_eq!(fitness_score(InjuryStatus::Minor), 70);
        assert_eq!(fitness_score(InjuryStatus::Major), 50);

        let players = seed::players().unwrap();
        let fitness: Vec<_> = players.iter().map(|p| profile_axes(p)[4].1).collect();
        assert_eq!(fitness, vec![95, 70, 50, 95, 95, 95]);
    }

    #[test]
    fn roster_averages_are_rounded_for_display_only() {
        let players = seed::players().unwrap();
        let stats = roster_stats(&players);
        assert_eq!(stats.total_players, 6);
        assert_eq!(stats.fit_players, 4);
        // 538 / 6 = 89.67 and 514 / 6 = 85.67
        assert_eq!(stats.avg_bat_speed, Some(90));
        assert_eq!(stats.avg_consistency, Some(86));
        assert_eq!(players[0].bat_speed, 92);
    }

    #[test]
    fn empty_collections_have_no_average() {
        let stats = roster_stats(&[]);
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.avg_bat_speed, None);
        assert_eq!(display_value(stats.avg_bat_speed), "n/a");
        assert_eq!(swing_stats(&[]).best_score, None);
    }

    #[test]
    fn swing_stats_summarize_scores() {
        let swings = seed::recent_swings().unwrap();
        // (92 + 85 + 78 + 65 + 88) / 5 = 81.6
        assert_eq!(
            swing_stats(&swings),
            SwingStats {
                total: 5,
                avg_score: Some(82),
                best_score: Some(92),
            }
        );
    }

    #[test]
    fn rounded_mean_rounds_halves_up() {
        assert_eq!(rounded_mean([1, 2]), Some(2));
        assert_eq!(rounded_mean([84, 85, 85, 84]), Some(85));
    }
}
