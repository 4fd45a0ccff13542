//! High score leaderboard
//!
//! In-memory top-10 for the end-of-run summary; nothing is persisted. The
//! embedding frontend may serialize the table if it keeps its own storage.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level reached when the run ended
    pub level: u32,
    /// Run duration in milliseconds
    pub duration_ms: f64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Sorted leaderboard, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would make the table
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Record a finished run. Returns the 1-indexed rank achieved, or None
    /// if the score did not qualify.
    pub fn add_score(
        &mut self,
        score: u64,
        level: u32,
        duration_ms: f64,
        timestamp: f64,
    ) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            rank,
            HighScoreEntry {
                score,
                level,
                duration_ms,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank + 1)
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_board(scores: &[u64]) -> HighScores {
        let mut board = HighScores::new();
        for &score in scores {
            let _ = board.add_score(score, 1, 10_000.0, 0.0);
        }
        board
    }

    #[test]
    fn zero_scores_never_qualify() {
        let board = HighScores::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn entries_stay_sorted_descending() {
        let board = filled_board(&[300, 100, 500, 200]);
        let scores: Vec<u64> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 300, 200, 100]);
    }

    #[test]
    fn add_score_reports_one_indexed_rank() {
        let mut board = filled_board(&[500, 300, 100]);
        assert_eq!(board.add_score(400, 3, 0.0, 0.0), Some(2));
        assert_eq!(board.add_score(600, 4, 0.0, 0.0), Some(1));
        assert_eq!(board.add_score(50, 1, 0.0, 0.0), Some(6));
    }

    #[test]
    fn table_truncates_at_ten_entries() {
        let mut board = filled_board(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);

        // a non-qualifying score changes nothing
        assert_eq!(board.add_score(5, 1, 0.0, 0.0), None);
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);

        // a qualifying score pushes the lowest off the table
        assert_eq!(board.add_score(95, 2, 0.0, 0.0), Some(2));
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(board.entries.last().map(|e| e.score), Some(20));
    }

    #[test]
    fn ties_rank_below_existing_entries() {
        let mut board = filled_board(&[500, 300]);
        assert_eq!(board.add_score(300, 2, 0.0, 0.0), Some(3));
    }

    #[test]
    fn top_score_tracks_the_head() {
        let board = filled_board(&[100, 900, 400]);
        assert_eq!(board.top_score(), Some(900));
        assert!(HighScores::new().top_score().is_none());
    }

    #[test]
    fn json_round_trip_preserves_the_table() {
        let board = filled_board(&[250, 750]);
        let json = board.to_json().expect("serialize");
        let restored = HighScores::from_json(&json).expect("deserialize");
        assert_eq!(restored.entries, board.entries);
    }
}
