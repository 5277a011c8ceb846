use std::fmt::Write;

use crate::criteria::{apply, Criteria};
use crate::models::{MedicalReport, Player, RecoveryStatus, SwingEntry};
use crate::stats::{self, display_value};
use crate::views::{PlayerFilters, PlayerSort, ReportFilters, ReportSort, SwingFilters, SwingSort};

fn active_injuries<'a>(reports: &'a [MedicalReport]) -> Vec<&'a MedicalReport> {
    let criteria = Criteria::new("", ReportFilters::default(), ReportSort::Severity);
    apply(reports, &criteria)
        .into_iter()
        .filter(|r| r.status != RecoveryStatus::Cleared)
        .collect()
}

pub fn build_report(
    reports: &[MedicalReport],
    players: &[Player],
    swings: &[SwingEntry],
    limit: usize,
) -> String {
    let report_stats = stats::report_stats(reports);
    let roster_stats = stats::roster_stats(players);
    let swing_stats = stats::swing_stats(swings);

    let mut output = String::new();

    let _ = writeln!(output, "# SwingAI Coaching Report");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Medical Overview");
    let _ = writeln!(
        output,
        "- {} reports, {} active, {} recovering, {} cleared",
        report_stats.total, report_stats.active, report_stats.recovering, report_stats.cleared
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Active Injuries");

    let active = active_injuries(reports);
    if active.is_empty() {
        let _ = writeln!(output, "No active injuries.");
    } else {
        for report in active.iter().take(limit) {
            let _ = writeln!(
                output,
                "- {} ({}, {}): {}, expected back {} ({}% of rehab done)",
                report.player,
                report.severity,
                report.status,
                report.injury_type,
                report.expected_return,
                stats::recovery_progress(report)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Squad");
    let _ = writeln!(
        output,
        "{} players, {} fit. Avg bat speed {} km/h, avg consistency {}/100.",
        roster_stats.total_players,
        roster_stats.fit_players,
        display_value(roster_stats.avg_bat_speed),
        display_value(roster_stats.avg_consistency)
    );

    let by_rating = Criteria::new("", PlayerFilters::default(), PlayerSort::Rating);
    for player in apply(players, &by_rating) {
        let _ = writeln!(
            output,
            "- {} ({}, {}) rating {}",
            player.name,
            player.role,
            player.injury_status,
            stats::overall_rating(player)
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Swings");

    let recent = apply(swings, &Criteria::new("", SwingFilters::default(), SwingSort::Date));
    if recent.is_empty() {
        let _ = writeln!(output, "No swings recorded.");
    } else {
        let _ = writeln!(
            output,
            "Average score {}, best {}.",
            display_value(swing_stats.avg_score),
            display_value(swing_stats.best_score)
        );
        for swing in recent.iter().take(limit) {
            let _ = writeln!(
                output,
                "- {} on {}: {} scored {} ({})",
                swing.player, swing.date, swing.shot_type, swing.score, swing.status
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn report_lists_sections_in_order() {
        let report = build_report(
            &seed::medical_reports().unwrap(),
            &seed::players().unwrap(),
            &seed::recent_swings().unwrap(),
            5,
        );

        let sections: Vec<_> = report.lines().filter(|l| l.starts_with("## ")).collect();
        assert_eq!(
            sections,
            vec!["## Medical Overview", "## Active Injuries", "## Squad", "## Recent Swings"]
        );
        assert!(report.contains("- 6 reports, 4 active, 2 recovering, 2 cleared"));
        assert!(report
            .contains("6 players, 4 fit. Avg bat speed 90 km/h, avg consistency 86/100."));
    }

    #[test]
    fn active_injuries_skip_cleared_and_lead_with_highest_severity() {
        let reports = seed::medical_reports().unwrap();
        let active = active_injuries(&reports);
        let players: Vec<_> = active.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(
            players,
            vec!["KL Rahul", "Rohit Sharma", "Hardik Pandya", "Virat Kohli"]
        );
    }

    #[test]
    fn limit_caps_swing_lines() {
        let report = build_report(&[], &[], &seed::recent_swings().unwrap(), 2);
        let swing_lines = report
            .lines()
            .skip_while(|l| *l != "## Recent Swings")
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(swing_lines, 2);
        assert!(report.contains("No active injuries."));
        assert!(report.contains("Avg bat speed n/a km/h"));
    }
}
