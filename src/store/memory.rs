//! In-memory salary record store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::calculation::PriorPeriodLookup;
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthKey, SalaryRecord};

use super::{SalaryFilter, SalaryPatch, SalaryStore};

/// A thread-safe in-memory [`SalaryStore`].
///
/// Records live in a map keyed by `(user, month)`, so the uniqueness
/// invariant is structural: the occupancy check and insert in
/// [`SalaryStore::create`] happen under a single lock, making duplicate
/// creation impossible even under concurrent callers.
#[derive(Debug, Default)]
pub struct MemorySalaryStore {
    records: Mutex<HashMap<(String, MonthKey), SalaryRecord>>,
}

impl MemorySalaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, HashMap<(String, MonthKey), SalaryRecord>>> {
        self.records.lock().map_err(|_| EngineError::Persistence {
            message: "salary store lock poisoned".to_string(),
        })
    }
}

impl SalaryStore for MemorySalaryStore {
    fn find(&self, filter: &SalaryFilter) -> EngineResult<Vec<SalaryRecord>> {
        let records = self.lock()?;
        let mut matching: Vec<SalaryRecord> = records
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (&a.user_id, a.month).cmp(&(&b.user_id, b.month)));
        Ok(matching)
    }

    fn find_one(&self, user_id: &str, month: MonthKey) -> EngineResult<Option<SalaryRecord>> {
        let records = self.lock()?;
        Ok(records.get(&(user_id.to_string(), month)).cloned())
    }

    fn create(&self, record: SalaryRecord) -> EngineResult<SalaryRecord> {
        let mut records = self.lock()?;
        let key = (record.user_id.clone(), record.month);
        if records.contains_key(&key) {
            return Err(EngineError::DuplicateRecord {
                user_id: record.user_id,
                month: record.month,
            });
        }
        records.insert(key, record.clone());
        Ok(record)
    }

    fn update(&self, id: Uuid, patch: &SalaryPatch) -> EngineResult<SalaryRecord> {
        let mut records = self.lock()?;
        let record = records
            .values_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;

        if let Some(base_pay) = patch.base_pay {
            record.base_pay = base_pay;
        }
        if let Some(bonus) = patch.bonus {
            record.bonus = bonus;
        }
        if let Some(currency) = &patch.currency {
            record.currency = currency.clone();
        }
        if let Some(remarks) = &patch.remarks {
            record.remarks = remarks.clone();
        }
        if patch.base_pay.is_some() || patch.bonus.is_some() {
            record.final_amount = record.base_pay + record.bonus - record.pto_deduction;
        }
        Ok(record.clone())
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut records = self.lock()?;
        let key = records
            .iter()
            .find(|(_, r)| r.id == id)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;
        records.remove(&key);
        Ok(())
    }
}

impl PriorPeriodLookup for MemorySalaryStore {
    fn record_for(&self, user_id: &str, month: MonthKey) -> EngineResult<Option<SalaryRecord>> {
        self.find_one(user_id, month)
    }
}
