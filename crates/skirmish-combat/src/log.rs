//! Append-only history of resolved hits
//!
//! Owned by the caller, never by the resolver. DOT results are not recorded.

use serde::{Deserialize, Serialize};

use crate::damage::DamageResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageLog {
    entries: Vec<DamageResult>,
}

impl DamageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result and hand back a reference to the stored entry
    pub fn record(&mut self, result: DamageResult) -> &DamageResult {
        self.entries.push(result);
        self.entries.last().expect("entry was just pushed")
    }

    pub fn entries(&self) -> &[DamageResult] {
        &self.entries
    }

    pub fn last(&self) -> Option<&DamageResult> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of final damage across all recorded hits
    pub fn total_damage(&self) -> f64 {
        self.entries.iter().map(|e| e.final_damage).sum()
    }

    /// Number of recorded critical hits
    pub fn critical_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_critical).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Pretty-printed JSON dump of every entry, for debugging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::compute_hit;
    use skirmish_core::{Attacker, DamageType, Defender};

    fn hit(roll: f64) -> DamageResult {
        let attacker = Attacker::new("Warrior", 100.0).with_crit(0.5, 2.0);
        compute_hit(&attacker, &Defender::new("Dummy", 0.0), DamageType::True, 1.0, roll)
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut log = DamageLog::new();
        assert!(log.is_empty());

        log.record(hit(0.9));
        let stored = log.record(hit(0.1));
        assert!(stored.is_critical);

        assert_eq!(log.len(), 2);
        assert!(!log.entries()[0].is_critical);
        assert_eq!(log.last().map(|e| e.final_damage), Some(200.0));
    }

    #[test]
    fn test_record_returns_stored_entry() {
        let mut log = DamageLog::new();
        log.record(hit(0.9));
        let stored = log.record(hit(0.1)).clone();
        assert_eq!(log.last(), Some(&stored));
        assert_eq!(log.entries()[1], stored);
    }

    #[test]
    fn test_totals() {
        let mut log = DamageLog::new();
        log.record(hit(0.9));
        log.record(hit(0.1));
        log.record(hit(0.2));
        assert_eq!(log.total_damage(), 500.0);
        assert_eq!(log.critical_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut log = DamageLog::new();
        log.record(hit(0.9));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_damage(), 0.0);
    }

    #[test]
    fn test_json_dump() {
        let mut log = DamageLog::new();
        log.record(hit(0.1));
        let json = log.to_json().unwrap();
        let parsed: Vec<DamageResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log.entries());
        assert!(json.contains("\"damage_type\": \"true\""));
    }
}
