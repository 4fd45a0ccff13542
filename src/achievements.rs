//! Achievement registry
//!
//! Fixed identities with a one-way unlocked flag. The registry outlives
//! individual runs; flags only reset when the whole registry is rebuilt.

use serde::Serialize;

/// Stable achievement identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstBlood,
    Exterminator,
    Collector,
    Veteran,
    LifeSaver,
    Survivor,
}

impl AchievementId {
    /// Stable string key for frontends and summary displays
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstBlood => "first_blood",
            AchievementId::Exterminator => "exterminator",
            AchievementId::Collector => "collector",
            AchievementId::Veteran => "veteran",
            AchievementId::LifeSaver => "life_saver",
            AchievementId::Survivor => "survivor",
        }
    }
}

/// Immutable metadata plus the unlock flag
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// The unlock sink consumed by the simulation and the end-of-run summary
#[derive(Debug, Clone, Serialize)]
pub struct Achievements {
    entries: Vec<Achievement>,
}

impl Default for Achievements {
    fn default() -> Self {
        Self::new()
    }
}

impl Achievements {
    pub fn new() -> Self {
        let def = |id, name, description, icon| Achievement {
            id,
            name,
            description,
            icon,
            unlocked: false,
        };
        Self {
            entries: vec![
                def(
                    AchievementId::FirstBlood,
                    "First Blood",
                    "Destroy your first enemy",
                    "🩸",
                ),
                def(
                    AchievementId::Exterminator,
                    "Exterminator",
                    "Destroy 50 enemies",
                    "💀",
                ),
                def(
                    AchievementId::Collector,
                    "Collector",
                    "Pick up 10 power-ups",
                    "🧲",
                ),
                def(AchievementId::Veteran, "Veteran", "Reach level 5", "🎖"),
                def(
                    AchievementId::LifeSaver,
                    "Life Saver",
                    "Pick up an extra life",
                    "💖",
                ),
                def(
                    AchievementId::Survivor,
                    "Survivor",
                    "Stay alive for 60 seconds",
                    "⏱",
                ),
            ],
        }
    }

    /// Unlock an achievement. Returns true only on the false→true transition;
    /// unlocking an already-unlocked id is a no-op.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        match self.entries.iter_mut().find(|a| a.id == id) {
            Some(entry) if !entry.unlocked => {
                entry.unlocked = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.entries.iter().any(|a| a.id == id && a.unlocked)
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|a| a.unlocked).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
