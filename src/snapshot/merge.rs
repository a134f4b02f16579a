use crate::snapshot::MeasurementSnapshot;

/// Merge a freshly built snapshot onto the retained one.
///
/// Device fields always come from `fresh`. The forecast-owned fields
/// (`condition`, `precip_probability`) are kept from `retained` unless `fresh`
/// sets them; with no retained snapshot they stay unset.
pub fn merge(
    fresh: MeasurementSnapshot,
    retained: Option<&MeasurementSnapshot>,
) -> MeasurementSnapshot {
    let Some(retained) = retained else {
        return fresh;
    };

    MeasurementSnapshot {
        condition: fresh.condition.or(retained.condition),
        precip_probability: fresh.precip_probability.or(retained.precip_probability),
        ..fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Condition, fixtures};

    #[test]
    fn merge_onto_nothing_is_idempotent() {
        let once = merge(fixtures::snapshot(), None);
        let twice = merge(fixtures::snapshot(), Some(&once));
        assert_eq!(once, twice);
        assert_eq!(twice.condition, None);
        assert_eq!(twice.precip_probability, None);
    }

    #[test]
    fn keeps_forecast_fields_from_retained() {
        let mut retained = fixtures::snapshot();
        retained.condition = Some(Condition::Cloudy);
        retained.precip_probability = Some(30);

        let mut fresh = fixtures::snapshot();
        fresh.temperature = 23.1;

        let merged = merge(fresh, Some(&retained));
        assert_eq!(merged.condition, Some(Condition::Cloudy));
        assert_eq!(merged.precip_probability, Some(30));
        assert_eq!(merged.temperature, 23.1);
    }

    #[test]
    fn fresh_forecast_fields_win() {
        let mut retained = fixtures::snapshot();
        retained.condition = Some(Condition::Cloudy);

        let mut fresh = fixtures::snapshot();
        fresh.condition = Some(Condition::Rainy);

        let merged = merge(fresh, Some(&retained));
        assert_eq!(merged.condition, Some(Condition::Rainy));
        assert_eq!(merged.precip_probability, None);
    }

    #[test]
    fn device_fields_overwrite_retained() {
        let retained = fixtures::snapshot();

        let mut fresh = fixtures::snapshot();
        fresh.raining = true;
        fresh.rain_rate = 1.2;
        fresh.forecast = "Rain later".to_owned();

        let merged = merge(fresh.clone(), Some(&retained));
        assert_eq!(merged, fresh);
    }
}
