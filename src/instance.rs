//! In-memory model of what a generated fixture does at runtime.
//!
//! Owned members live inside each `Instance`; alias members read and write a
//! position-keyed `SharedCells` table. The table is seeded lazily (cell `p`
//! starts at `p`) and never torn down.

use std::collections::BTreeMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::diagnostics::GenError;
use crate::fixture::{AggregateSpec, MemberKind};

static GLOBAL_CELLS: LazyLock<SharedCells> = LazyLock::new(SharedCells::new);

/// Position-keyed storage behind `SharedAlias` members.
#[derive(Debug, Default)]
pub struct SharedCells {
    cells: Mutex<BTreeMap<usize, i64>>,
}

impl SharedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide table, shared by every aggregate.
    pub fn global() -> &'static SharedCells {
        &GLOBAL_CELLS
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<usize, i64>> {
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn load(&self, position: usize) -> i64 {
        *self.lock().entry(position).or_insert(position as i64)
    }

    pub fn store(&self, position: usize, value: i64) {
        self.lock().insert(position, value);
    }

    /// Number of cells touched so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// A default-constructed value of a generated aggregate.
#[derive(Debug)]
pub struct Instance<'a> {
    spec: &'a AggregateSpec,
    cells: &'a SharedCells,
    owned: BTreeMap<usize, i64>,
}

impl<'a> Instance<'a> {
    pub fn new(spec: &'a AggregateSpec, cells: &'a SharedCells) -> Self {
        let owned = spec
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::OwnedValue)
            .map(|m| (m.position, m.initial_value()))
            .collect();
        Self { spec, cells, owned }
    }

    /// Instance bound to the process-wide cell table.
    pub fn with_global_cells(spec: &'a AggregateSpec) -> Self {
        Self::new(spec, SharedCells::global())
    }

    /// Value of `get<index>()`.
    pub fn get(&self, index: usize) -> Result<i64, GenError> {
        let member = self.spec.member_at(index)?;
        match member.kind {
            MemberKind::OwnedValue => self
                .owned
                .get(&member.position)
                .copied()
                .ok_or_else(|| GenError::index_out_of_range(self.spec.name(), index, self.spec.size)),
            MemberKind::SharedAlias => Ok(self.cells.load(member.position)),
        }
    }

    /// Assign through `get<index>()`.
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), GenError> {
        let member = *self.spec.member_at(index)?;
        match member.kind {
            MemberKind::OwnedValue => {
                self.owned.insert(member.position, value);
            }
            MemberKind::SharedAlias => self.cells.store(member.position, value),
        }
        Ok(())
    }

    /// Every member in accessor order.
    pub fn values(&self) -> Result<Vec<i64>, GenError> {
        (0..self.spec.member_count()).map(|i| self.get(i)).collect()
    }
}
