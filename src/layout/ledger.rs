//! Per-generation image usage bookkeeping

use crate::layout::asset::AssetId;
use bitvec::prelude::{BitVec, bitvec};

/// Usage counts for every asset during one layout generation
///
/// Alongside the counts, a bit set tracks which assets still await their
/// first use so the first selection tier can be read without scanning
/// counts.
#[derive(Debug, Clone)]
pub struct ImageUsageLedger {
    counts: Vec<u32>,
    awaiting_first_use: BitVec,
    quota: u32,
}

impl ImageUsageLedger {
    /// Create a ledger for `asset_count` assets, each allowed `quota` uses
    pub fn new(asset_count: usize, quota: u32) -> Self {
        Self {
            counts: vec![0; asset_count],
            awaiting_first_use: bitvec![1; asset_count],
            quota,
        }
    }

    /// Number of tracked assets
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the ledger tracks no assets
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Required uses per asset
    pub const fn quota(&self) -> u32 {
        self.quota
    }

    /// Current use count of `asset` (zero for unknown handles)
    pub fn count(&self, asset: AssetId) -> u32 {
        self.counts.get(asset.index()).copied().unwrap_or(0)
    }

    /// Whether `asset` can take another use without exceeding its quota
    pub fn has_capacity(&self, asset: AssetId) -> bool {
        asset.index() < self.counts.len() && self.count(asset) < self.quota
    }

    /// Record one use of `asset`
    ///
    /// Returns `false` (and records nothing) when the asset is unknown or
    /// already at its quota.
    pub fn record_use(&mut self, asset: AssetId) -> bool {
        if !self.has_capacity(asset) {
            return false;
        }
        if let Some(count) = self.counts.get_mut(asset.index()) {
            *count += 1;
        }
        self.awaiting_first_use.set(asset.index(), false);
        true
    }

    /// Assets that have never been used, in handle order
    pub fn awaiting_first_use(&self) -> impl Iterator<Item = AssetId> + '_ {
        self.awaiting_first_use.iter_ones().map(AssetId)
    }

    /// Assets used exactly `uses` times that are still below quota
    pub fn used_exactly(&self, uses: u32) -> impl Iterator<Item = AssetId> + '_ {
        let quota = self.quota;
        self.counts
            .iter()
            .enumerate()
            .filter(move |&(_, &count)| count == uses && count < quota)
            .map(|(index, _)| AssetId(index))
    }

    /// Whether every asset has reached its quota
    pub fn is_satisfied(&self) -> bool {
        self.counts.iter().all(|&count| count == self.quota)
    }

    /// Total uses still missing across all assets
    pub fn outstanding(&self) -> usize {
        self.counts
            .iter()
            .map(|&count| self.quota.saturating_sub(count) as usize)
            .sum()
    }

    /// Assets whose count differs from the quota, with their counts
    pub fn deficits(&self) -> Vec<(AssetId, u32)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != self.quota)
            .map(|(index, &count)| (AssetId(index), count))
            .collect()
    }

    /// Consume the ledger, returning the raw counts in handle order
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ledger.rs"]
mod tests;
