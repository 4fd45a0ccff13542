//! Timed power-up effects with lazy expiry
//!
//! Entries carry an absolute expiry timestamp and are never polled; every
//! consumer filters by `expires_at_ms > now` at the moment it asks. Expired
//! entries may linger in storage without affecting gameplay.

use serde::Serialize;

use super::state::PowerUpKind;

/// A timed, non-stacking modifier (triple-shot or shield)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub expires_at_ms: f64,
}

/// At most one entry per kind; re-activation replaces the expiry
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActiveEffects {
    entries: Vec<ActivePowerUp>,
}

impl ActiveEffects {
    /// Upsert an effect. Extra-life is consumed on pickup and never stored.
    pub fn activate(&mut self, kind: PowerUpKind, expires_at_ms: f64) {
        if kind == PowerUpKind::ExtraLife {
            debug_assert!(false, "extra-life is not a timed effect");
            return;
        }
        match self.entries.iter_mut().find(|e| e.kind == kind) {
            Some(entry) => entry.expires_at_ms = expires_at_ms,
            None => self.entries.push(ActivePowerUp {
                kind,
                expires_at_ms,
            }),
        }
    }

    pub fn is_active(&self, kind: PowerUpKind, now_ms: f64) -> bool {
        self.entries
            .iter()
            .any(|e| e.kind == kind && e.expires_at_ms > now_ms)
    }

    /// Remove the shield entry. Returns true only if it was still active;
    /// a stale entry is dropped without absorbing anything.
    pub fn consume_shield(&mut self, now_ms: f64) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.kind == PowerUpKind::Shield)
        {
            Some(i) => self.entries.remove(i).expires_at_ms > now_ms,
            None => false,
        }
    }

    /// Drop expired entries (display hygiene only; correctness never needs it)
    pub fn prune(&mut self, now_ms: f64) {
        self.entries.retain(|e| e.expires_at_ms > now_ms);
    }

    /// Active effects with remaining milliseconds
    pub fn remaining(&self, now_ms: f64) -> impl Iterator<Item = (PowerUpKind, f64)> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.expires_at_ms > now_ms)
            .map(move |e| (e.kind, e.expires_at_ms - now_ms))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactivation_replaces_instead_of_stacking() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Shield, 1_000.0);
        effects.activate(PowerUpKind::Shield, 5_000.0);

        assert_eq!(effects.len(), 1);
        assert!(effects.is_active(PowerUpKind::Shield, 4_999.0));
        assert!(!effects.is_active(PowerUpKind::Shield, 5_000.0));
    }

    #[test]
    fn kinds_are_tracked_independently() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::TripleShot, 2_000.0);
        effects.activate(PowerUpKind::Shield, 3_000.0);

        assert_eq!(effects.len(), 2);
        assert!(effects.is_active(PowerUpKind::TripleShot, 1_000.0));
        assert!(effects.is_active(PowerUpKind::Shield, 2_500.0));
        assert!(!effects.is_active(PowerUpKind::TripleShot, 2_500.0));
    }

    #[test]
    fn expired_entry_is_inactive_without_removal() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::TripleShot, 1_000.0);

        assert!(!effects.is_active(PowerUpKind::TripleShot, 1_500.0));
        assert_eq!(effects.len(), 1);

        effects.prune(1_500.0);
        assert!(effects.is_empty());
    }

    #[test]
    fn consume_shield_only_absorbs_while_active() {
        let mut effects = ActiveEffects::default();
        assert!(!effects.consume_shield(0.0));

        effects.activate(PowerUpKind::Shield, 1_000.0);
        assert!(effects.consume_shield(500.0));
        assert!(effects.is_empty());

        effects.activate(PowerUpKind::Shield, 1_000.0);
        assert!(!effects.consume_shield(2_000.0));
        assert!(effects.is_empty());
    }

    #[test]
    fn remaining_reports_time_left() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Shield, 4_000.0);
        effects.activate(PowerUpKind::TripleShot, 1_000.0);

        let left: Vec<_> = effects.remaining(3_000.0).collect();
        assert_eq!(left, vec![(PowerUpKind::Shield, 1_000.0)]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // however many times a kind is re-activated, exactly one entry
            // remains and it carries the expiry of the latest activation
            #[test]
            fn refresh_keeps_a_single_entry(expiries in proptest::collection::vec(0.0f64..1e9, 1..20)) {
                let mut effects = ActiveEffects::default();
                for &expiry in &expiries {
                    effects.activate(PowerUpKind::Shield, expiry);
                }
                prop_assert_eq!(effects.len(), 1);
                let last = expiries[expiries.len() - 1];
                prop_assert!(effects.is_active(PowerUpKind::Shield, last - 1.0) || last < 1.0);
                prop_assert!(!effects.is_active(PowerUpKind::Shield, last));
            }
        }
    }
}
