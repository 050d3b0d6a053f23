//! Choosing one license among same-named registry rows

use super::LicenseRecord;
use crate::locality::shared_locality_tokens;

/// Picks the canonical license out of the rows returned for a business name.
///
/// Candidates arrive in registry order, one per returned row. A row that
/// could not be decoded, or lacks a license number, is still present with
/// blank fields; choosing it resolves to no license.
pub trait LicenseSelector: Send + Sync {
    fn select(
        &self,
        candidates: Vec<LicenseRecord>,
        address_hint: Option<&str>,
    ) -> Option<LicenseRecord>;
}

/// Take the first row the registry returned. No ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRow;

impl LicenseSelector for FirstRow {
    fn select(
        &self,
        candidates: Vec<LicenseRecord>,
        _address_hint: Option<&str>,
    ) -> Option<LicenseRecord> {
        candidates.into_iter().next()
    }
}

/// Prefer the row whose registered address shares the most leading locality
/// tokens with the hint; ties keep registry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalityOverlap;

impl LicenseSelector for LocalityOverlap {
    fn select(
        &self,
        candidates: Vec<LicenseRecord>,
        address_hint: Option<&str>,
    ) -> Option<LicenseRecord> {
        let Some(hint) = address_hint else {
            return candidates.into_iter().next();
        };

        let mut best: Option<(usize, LicenseRecord)> = None;
        for candidate in candidates {
            let score = shared_locality_tokens(hint, &candidate.registered_address);
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, record)| record)
    }
}
