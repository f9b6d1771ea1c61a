use chrono::NaiveTime;
use common::types::TABLE_DIM_TIME;
use postgres::types::ToSql;

use crate::calendar;
use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;

pub const TICK_MINUTES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRow {
    pub time_key: i32,
    pub full_time: NaiveTime,
    pub hour_num: i16,
    pub minute_num: i16,
    pub time_slot: &'static str,
}

impl DimensionRow for TimeRow {
    const TABLE: &'static str = TABLE_DIM_TIME;
    const COLUMNS: &'static [&'static str] =
        &["time_key", "full_time", "hour_num", "minute_num", "time_slot"];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.time_key,
            &self.full_time,
            &self.hour_num,
            &self.minute_num,
            &self.time_slot,
        ]
    }
}

/// One row per 5 minute tick of a day.
pub fn generate() -> Result<Vec<TimeRow>> {
    let mut rows = Vec::with_capacity((24 * 60 / TICK_MINUTES) as usize);
    for hour in 0..24 {
        for minute in (0..60).step_by(TICK_MINUTES as usize) {
            let t = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
                WarehouseGenError::Internal(format!("invalid time {hour}:{minute}"))
            })?;
            rows.push(TimeRow {
                time_key: calendar::time_key(t),
                full_time: t,
                hour_num: hour as i16,
                minute_num: minute as i16,
                time_slot: calendar::time_slot(t).into(),
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate() -> Result<()> {
        let rows = generate()?;
        assert_eq!(rows.len(), 288);

        let pairs: HashSet<_> = rows.iter().map(|r| (r.hour_num, r.minute_num)).collect();
        assert_eq!(pairs.len(), 288);
        let keys: HashSet<_> = rows.iter().map(|r| r.time_key).collect();
        assert_eq!(keys.len(), 288);

        assert_eq!(rows[0].time_key, 0);
        assert_eq!(rows[287].time_key, 235500);
        Ok(())
    }

    #[test]
    fn test_slots_are_contiguous() -> Result<()> {
        let rows = generate()?;

        // collapse consecutive equal slots: night, morning, afternoon, night
        let mut runs: Vec<&str> = vec![];
        for row in &rows {
            if runs.last() != Some(&row.time_slot) {
                runs.push(row.time_slot);
            }
        }
        assert_eq!(runs, vec!["NIGHT", "MORNING", "AFTERNOON", "NIGHT"]);

        let morning = rows.iter().filter(|r| r.time_slot == "MORNING").count();
        let afternoon = rows.iter().filter(|r| r.time_slot == "AFTERNOON").count();
        let night = rows.iter().filter(|r| r.time_slot == "NIGHT").count();
        assert_eq!(morning, 72);
        assert_eq!(afternoon, 72);
        assert_eq!(night, 144);
        Ok(())
    }
}
