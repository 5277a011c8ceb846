use std::cmp::Ordering;
use std::str::FromStr;

use crate::criteria::{FilterSet, ParseSortKeyError, Searchable, Selection, SortKey};
use crate::models::{
    InjuryStatus, MedicalReport, Player, RecoveryStatus, Severity, SwingEntry, SwingStatus,
};
use crate::stats;

impl Searchable for MedicalReport {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.player.as_str(), self.injury_type.as_str()]
    }
}

impl Searchable for Player {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for SwingEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.player.as_str(), self.shot_type.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub severity: Selection<Severity>,
    pub status: Selection<RecoveryStatus>,
}

impl FilterSet<MedicalReport> for ReportFilters {
    fn admits(&self, record: &MedicalReport) -> bool {
        self.severity.admits(record.severity) && self.status.admits(record.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportSort {
    /// Most recently reported first.
    #[default]
    DateReported,
    /// Critical first.
    Severity,
    /// Soonest return first.
    ExpectedReturn,
}

impl SortKey<MedicalReport> for ReportSort {
    fn compare(&self, a: &MedicalReport, b: &MedicalReport) -> Ordering {
        match self {
            ReportSort::DateReported => b.date_reported.cmp(&a.date_reported),
            ReportSort::Severity => b.severity.cmp(&a.severity),
            ReportSort::ExpectedReturn => a.expected_return.cmp(&b.expected_return),
        }
    }
}

impl FromStr for ReportSort {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateReported" => Ok(ReportSort::DateReported),
            "severity" => Ok(ReportSort::Severity),
            "expectedReturn" => Ok(ReportSort::ExpectedReturn),
            other => Err(ParseSortKeyError {
                value: other.to_string(),
                expected: "dateReported, severity, expectedReturn",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerFilters {
    pub injury: Selection<InjuryStatus>,
}

impl FilterSet<Player> for PlayerFilters {
    fn admits(&self, record: &Player) -> bool {
        self.injury.admits(record.injury_status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerSort {
    /// Roster insertion order.
    #[default]
    Roster,
    Name,
    /// Highest overall rating first.
    Rating,
    /// Newest joiner first.
    JoinDate,
}

impl SortKey<Player> for PlayerSort {
    fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerSort::Roster => Ordering::Equal,
            PlayerSort::Name => a.name.cmp(&b.name),
            PlayerSort::Rating => stats::overall_rating(b).cmp(&stats::overall_rating(a)),
            PlayerSort::JoinDate => b.join_date.cmp(&a.join_date),
        }
    }
}

impl FromStr for PlayerSort {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roster" => Ok(PlayerSort::Roster),
            "name" => Ok(PlayerSort::Name),
            "rating" => Ok(PlayerSort::Rating),
            "joinDate" => Ok(PlayerSort::JoinDate),
            other => Err(ParseSortKeyError {
                value: other.to_string(),
                expected: "roster, name, rating, joinDate",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwingFilters {
    pub status: Selection<SwingStatus>,
}

impl FilterSet<SwingEntry> for SwingFilters {
    fn admits(&self, record: &SwingEntry) -> bool {
        self.status.admits(record.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwingSort {
    #[default]
    Date,
    Score,
}

impl SortKey<SwingEntry> for SwingSort {
    fn compare(&self, a: &SwingEntry, b: &SwingEntry) -> Ordering {
        match self {
            SwingSort::Date => b.date.cmp(&a.date),
            SwingSort::Score => b.score.cmp(&a.score),
        }
    }
}

impl FromStr for SwingSort {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SwingSort::Date),
            "score" => Ok(SwingSort::Score),
            other => Err(ParseSortKeyError {
                value: other.to_string(),
                expected: "date, score",
            }),
        }
    }
}
