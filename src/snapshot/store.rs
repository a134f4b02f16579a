use std::sync::{Arc, RwLock};

use crate::snapshot::{ForecastUpdate, MeasurementSnapshot, merge};

/// Last known good snapshot, shared between the refresh loop and readers.
///
/// Every write swaps in a complete snapshot, so readers holding an `Arc` never
/// see a half-merged state.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<MeasurementSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<MeasurementSnapshot>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn merge_in(&self, fresh: MeasurementSnapshot) -> Arc<MeasurementSnapshot> {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let merged = Arc::new(merge(fresh, guard.as_deref()));
        *guard = Some(Arc::clone(&merged));
        merged
    }

    /// Record forecast data on the retained snapshot. Returns `false` when
    /// nothing has been published yet.
    pub fn contribute_forecast(&self, update: ForecastUpdate) -> bool {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let Some(current) = guard.as_ref() else {
            return false;
        };

        let mut next = MeasurementSnapshot::clone(current);
        next.apply_forecast(update);
        *guard = Some(Arc::new(next));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Condition, fixtures};

    #[test]
    fn empty_store_has_no_snapshot() {
        let store = SnapshotStore::new();
        assert!(store.current().is_none());
        assert!(!store.contribute_forecast(ForecastUpdate::default()));
    }

    #[test]
    fn forecast_survives_the_next_refresh() {
        let store = SnapshotStore::new();
        store.merge_in(fixtures::snapshot());

        assert!(store.contribute_forecast(ForecastUpdate {
            condition: Some(Condition::Cloudy),
            precip_probability: Some(20),
        }));

        let mut fresh = fixtures::snapshot();
        fresh.temperature = 21.4;
        store.merge_in(fresh);

        let current = store.current().unwrap();
        assert_eq!(current.temperature, 21.4);
        assert_eq!(current.condition, Some(Condition::Cloudy));
        assert_eq!(current.precip_probability, Some(20));
    }

    #[test]
    fn readers_keep_their_snapshot_across_publishes() {
        let store = SnapshotStore::new();
        store.merge_in(fixtures::snapshot());
        let before = store.current().unwrap();

        let mut fresh = fixtures::snapshot();
        fresh.temperature = -1.0;
        store.merge_in(fresh);

        assert_eq!(before.temperature, 20.5);
        assert_eq!(store.current().unwrap().temperature, -1.0);
    }
}
