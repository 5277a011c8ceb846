use anyhow::Context;
use chrono::NaiveDate;

use crate::models::{
    InjuryStatus, MedicalReport, Player, RecoveryStatus, RestUnit, Severity, SwingEntry,
    SwingStatus,
};

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

pub fn medical_reports() -> anyhow::Result<Vec<MedicalReport>> {
    let reports = vec![
        MedicalReport {
            id: 1,
            player: "Rohit Sharma".to_string(),
            player_id: 1,
            injury_type: "Shoulder Strain".to_string(),
            body_part: "Right Shoulder".to_string(),
            severity: Severity::Moderate,
            status: RecoveryStatus::Recovering,
            date_reported: parse_date("2024-02-18")?,
            rest_duration: 2,
            rest_unit: RestUnit::Weeks,
            expected_return: parse_date("2024-03-04")?,
            medical_notes: "Grade 2 strain of the rotator cuff muscles. Pain during overhead movements and batting strokes. MRI shows no tear.".to_string(),
            treatment_plan: "Physiotherapy 3x/week, ice therapy, anti-inflammatory medication, gradual strengthening after week 1.".to_string(),
            doctor_assigned: "Dr. Rajesh Kumar".to_string(),
            last_updated: parse_date("2024-02-20")?,
            sessions_completed: 3,
            total_sessions: 12,
        },
        MedicalReport {
            id: 2,
            player: "Virat Kohli".to_string(),
            player_id: 2,
            injury_type: "Wrist Fatigue".to_string(),
            body_part: "Left Wrist".to_string(),
            severity: Severity::Low,
            status: RecoveryStatus::Monitoring,
            date_reported: parse_date("2024-02-19")?,
            rest_duration: 5,
            rest_unit: RestUnit::Days,
            expected_return: parse_date("2024-02-24")?,
            medical_notes: "Mild wrist fatigue after an intensive practice session. No structural damage.".to_string(),
            treatment_plan: "Rest from batting practice, wrist mobilization exercises, compression bandage during training.".to_string(),
            doctor_assigned: "Dr. Priya Mehta".to_string(),
            last_updated: parse_date("2024-02-20")?,
            sessions_completed: 1,
            total_sessions: 3,
        },
        MedicalReport {
            id: 3,
            player: "KL Rahul".to_string(),
            player_id: 3,
            injury_type: "Lower Back Tightness".to_string(),
            body_part: "Lumbar Region".to_string(),
            severity: Severity::High,
            status: RecoveryStatus::RestRequired,
            date_reported: parse_date("2024-02-17")?,
            rest_duration: 3,
            rest_unit: RestUnit::Weeks,
            expected_return: parse_date("2024-03-10")?,
            medical_notes: "Acute lower back spasm with limited range of motion. X-ray rules out fracture.".to_string(),
            treatment_plan: "Complete rest for 1 week, then gradual mobility work, core strengthening and massage therapy 2x/week.".to_string(),
            doctor_assigned: "Dr. Anil Desai".to_string(),
            last_updated: parse_date("2024-02-20")?,
            sessions_completed: 2,
            total_sessions: 15,
        },
        MedicalReport {
            id: 4,
            player: "Hardik Pandya".to_string(),
            player_id: 5,
            injury_type: "Ankle Sprain".to_string(),
            body_part: "Right Ankle".to_string(),
            severity: Severity::Moderate,
            status: RecoveryStatus::Recovering,
            date_reported: parse_date("2024-02-10")?,
            rest_duration: 2,
            rest_unit: RestUnit::Weeks,
            expected_return: parse_date("2024-02-25")?,
            medical_notes: "Grade 1 lateral ankle sprain. Mild swelling, no ligament tear on ultrasound.".to_string(),
            treatment_plan: "RICE protocol, ankle strengthening, balance training, gradual return to running.".to_string(),
            doctor_assigned: "Dr. Rajesh Kumar".to_string(),
            last_updated: parse_date("2024-02-19")?,
            sessions_completed: 6,
            total_sessions: 10,
        },
        MedicalReport {
            id: 5,
            player: "Shreyas Iyer".to_string(),
            player_id: 4,
            injury_type: "Hamstring Tightness".to_string(),
            body_part: "Left Hamstring".to_string(),
            severity: Severity::Low,
            status: RecoveryStatus::Cleared,
            date_reported: parse_date("2024-02-05")?,
            rest_duration: 1,
            rest_unit: RestUnit::Weeks,
            expected_return: parse_date("2024-02-12")?,
            medical_notes: "Mild hamstring tightness after a sprinting drill. No tear.".to_string(),
            treatment_plan: "Stretching, sports massage, return to running protocol completed.".to_string(),
            doctor_assigned: "Dr. Priya Mehta".to_string(),
            last_updated: parse_date("2024-02-12")?,
            sessions_completed: 5,
            total_sessions: 5,
        },
        MedicalReport {
            id: 6,
            player: "Rishabh Pant".to_string(),
            player_id: 6,
            injury_type: "Finger Contusion".to_string(),
            body_part: "Right Index Finger".to_string(),
            severity: Severity::Low,
            status: RecoveryStatus::Cleared,
            date_reported: parse_date("2024-02-08")?,
            rest_duration: 4,
            rest_unit: RestUnit::Days,
            expected_return: parse_date("2024-02-12")?,
            medical_notes: "Impact injury while wicket-keeping. X-ray negative for fracture.".to_string(),
            treatment_plan: "Ice therapy, buddy taping, pain management. Cleared for full activity.".to_string(),
            doctor_assigned: "Dr. Anil Desai".to_string(),
            last_updated: parse_date("2024-02-12")?,
            sessions_completed: 2,
            total_sessions: 2,
        },
    ];

    Ok(reports)
}

pub fn players() -> anyhow::Result<Vec<Player>> {
    let players = vec![
        Player {
            id: 1,
            name: "Rohit Sharma".to_string(),
            role: "Opening Batsman".to_string(),
            batting_style: "Right-handed".to_string(),
            age: 36,
            matches_played: 24,
            avg_score: 88,
            bat_speed: 92,
            consistency: 88,
            form: 90,
            injury_status: InjuryStatus::Fit,
            join_date: parse_date("2024-01-15")?,
            email: "rohit.sharma@team.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        },
        Player {
            id: 2,
            name: "Virat Kohli".to_string(),
            role: "Top Order Batsman".to_string(),
            batting_style: "Right-handed".to_string(),
            age: 35,
            matches_played: 28,
            avg_score: 92,
            bat_speed: 89,
            consistency: 92,
            form: 88,
            injury_status: InjuryStatus::Minor,
            join_date: parse_date("2024-01-10")?,
            email: "virat.kohli@team.com".to_string(),
            phone: "+91 98765 43211".to_string(),
        },
        Player {
            id: 3,
            name: "KL Rahul".to_string(),
            role: "Wicket-keeper Batsman".to_string(),
            batting_style: "Right-handed".to_string(),
            age: 31,
            matches_played: 20,
            avg_score: 82,
            bat_speed: 87,
            consistency: 85,
            form: 82,
            injury_status: InjuryStatus::Major,
            join_date: parse_date("2024-01-20")?,
            email: "kl.rahul@team.com".to_string(),
            phone: "+91 98765 43212".to_string(),
        },
        Player {
            id: 4,
            name: "Shreyas Iyer".to_string(),
            role: "Middle Order Batsman".to_string(),
            batting_style: "Right-handed".to_string(),
            age: 29,
            matches_played: 18,
            avg_score: 84,
            bat_speed: 85,
            consistency: 83,
            form: 85,
            injury_status: InjuryStatus::Fit,
            join_date: parse_date("2024-02-01")?,
            email: "shreyas.iyer@team.com".to_string(),
            phone: "+91 98765 43213".to_string(),
        },
        Player {
            id: 5,
            name: "Hardik Pandya".to_string(),
            role: "All-rounder".to_string(),
            batting_style: "Right-handed".to_string(),
            age: 30,
            matches_played: 22,
            avg_score: 86,
            bat_speed: 94,
            consistency: 80,
            form: 87,
            injury_status: InjuryStatus::Fit,
            join_date: parse_date("2024-01-25")?,
            email: "hardik.pandya@team.com".to_string(),
            phone: "+91 98765 43214".to_string(),
        },
        Player {
            id: 6,
            name: "Rishabh Pant".to_string(),
            role: "Wicket-keeper Batsman".to_string(),
            batting_style: "Left-handed".to_string(),
            age: 26,
            matches_played: 19,
            avg_score: 87,
            bat_speed: 91,
            consistency: 86,
            form: 89,
            injury_status: InjuryStatus::Fit,
            join_date: parse_date("2024-02-05")?,
            email: "rishabh.pant@team.com".to_string(),
            phone: "+91 98765 43215".to_string(),
        },
    ];

    Ok(players)
}

pub fn recent_swings() -> anyhow::Result<Vec<SwingEntry>> {
    let rows = vec![
        (1, "2024-02-20", "Front Foot Drive", 92, SwingStatus::Excellent),
        (2, "2024-02-20", "Cover Drive", 85, SwingStatus::Good),
        (3, "2024-02-19", "Pull Shot", 78, SwingStatus::Good),
        (4, "2024-02-19", "Straight Drive", 65, SwingStatus::NeedsImprovement),
        (5, "2024-02-18", "Square Cut", 88, SwingStatus::Good),
    ];

    let mut swings = Vec::with_capacity(rows.len());
    for (id, date, shot_type, score, status) in rows {
        swings.push(SwingEntry {
            id,
            player: "Rohit Sharma".to_string(),
            date: parse_date(date)?,
            shot_type: shot_type.to_string(),
            score,
            status,
        });
    }

    Ok(swings)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let players = players().unwrap();
        let ids: HashSet<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), players.len());
        assert_eq!(players[1].email, "virat.kohli@team.com");
        assert_eq!(players[5].phone, "+91 98765 43215");
    }

    #[test]
    fn every_report_references_a_seeded_player() {
        let players = players().unwrap();
        for report in medical_reports().unwrap() {
            let player = players.iter().find(|p| p.id == report.player_id).unwrap();
            assert_eq!(player.name, report.player);
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("20/02/2024").is_err());
        assert_eq!(parse_date("2024-02-29").unwrap().to_string(), "2024-02-29");
    }
}
