use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::models::{InjuryStatus, NewPlayer, Player};

/// In-memory team roster for a single session.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn next_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    pub fn add(&mut self, new_player: NewPlayer) -> &Player {
        self.add_on(new_player, Utc::now().date_naive())
    }

    pub fn add_on(&mut self, new_player: NewPlayer, joined: NaiveDate) -> &Player {
        let player = Player {
            id: self.next_id(),
            name: non_empty(new_player.name).unwrap_or_else(|| "New Player".to_string()),
            role: non_empty(new_player.role).unwrap_or_else(|| "Batsman".to_string()),
            batting_style: non_empty(new_player.batting_style)
                .unwrap_or_else(|| "Right-handed".to_string()),
            age: new_player.age.filter(|age| *age > 0).unwrap_or(25),
            matches_played: 0,
            avg_score: 0,
            bat_speed: 70,
            consistency: 60,
            form: 50,
            injury_status: InjuryStatus::Fit,
            join_date: joined,
            email: new_player.email.unwrap_or_default(),
            phone: new_player.phone.unwrap_or_default(),
        };

        info!(id = player.id, name = %player.name, "player added to roster");
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }

    pub fn remove(&mut self, id: u32) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        let player = self.players.remove(index);
        info!(id, name = %player.name, "player removed from roster");
        Some(player)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn joined() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn added_player_gets_max_id_plus_one_and_defaults() {
        let mut roster = Roster::new(seed::players().unwrap());
        let player = roster
            .add_on(
                NewPlayer {
                    name: Some("Shubman Gill".to_string()),
                    ..NewPlayer::default()
                },
                joined(),
            )
            .clone();

        assert_eq!(player.id, 7);
        assert_eq!(player.role, "Batsman");
        assert_eq!(player.batting_style, "Right-handed");
        assert_eq!(player.age, 25);
        assert_eq!((player.bat_speed, player.consistency, player.form), (70, 60, 50));
        assert_eq!(player.injury_status, InjuryStatus::Fit);
        assert_eq!(player.join_date, joined());
        assert_eq!(roster.players().last(), Some(&player));
    }

    #[test]
    fn ids_follow_the_maximum_not_the_length() {
        let mut roster = Roster::new(seed::players().unwrap());
        roster.remove(3);
        assert_eq!(roster.players().len(), 5);
        assert_eq!(roster.next_id(), 7);

        roster.remove(6);
        assert_eq!(roster.next_id(), 6);
    }

    #[test]
    fn empty_roster_starts_at_one() {
        let mut roster = Roster::default();
        let player = roster.add_on(NewPlayer::default(), joined());
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "New Player");
    }

    #[test]
    fn looks_up_players_by_id() {
        let mut roster = Roster::new(seed::players().unwrap());
        assert_eq!(roster.get(5).map(|p| p.name.as_str()), Some("Hardik Pandya"));
        assert!(roster.get(0).is_none());

        roster.remove(5);
        assert!(roster.get(5).is_none());
    }

    #[test]
    fn removing_unknown_id_leaves_roster_untouched() {
        let mut roster = Roster::new(seed::players().unwrap());
        assert!(roster.remove(42).is_none());
        assert_eq!(roster.players().len(), 6);
    }
}
