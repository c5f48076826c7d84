//! Matching of uploaded consent rows to union members.
//!
//! The directory is loaded once per batch and queried per row without touching the
//! database, so the same routine serves the in-process path and the fallback path.

use crate::{
    model::consent::BulkUploadRowDto,
    server::model::db::{MemberModel, MemberPropertyUnitModel},
};

/// Optional address filters of an uploaded row, trimmed and lowercased.
///
/// Blank values count as absent.
#[derive(Debug, Default, PartialEq, Eq)]
struct RowFilters {
    address: Option<String>,
    dong: Option<String>,
    ho: Option<String>,
}

impl RowFilters {
    fn from_row(row: &BulkUploadRowDto) -> Self {
        Self {
            address: normalize_filter(row.address.as_deref()),
            dong: normalize_filter(row.dong.as_deref()),
            ho: normalize_filter(row.ho.as_deref()),
        }
    }

    fn is_empty(&self) -> bool {
        self.address.is_none() && self.dong.is_none() && self.ho.is_none()
    }

    fn matches_unit(&self, unit: &MemberPropertyUnitModel) -> bool {
        contains_filter(unit.jibun_address.as_deref(), self.address.as_deref())
            && contains_filter(unit.dong.as_deref(), self.dong.as_deref())
            && contains_filter(unit.ho.as_deref(), self.ho.as_deref())
    }

    /// Every supplied filter must appear in the member-level address
    fn matches_member_address(&self, property_address: Option<&str>) -> bool {
        [&self.address, &self.dong, &self.ho]
            .into_iter()
            .flatten()
            .all(|filter| contains_filter(property_address, Some(filter)))
    }
}

fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// `None` filters always pass, a supplied filter requires a value containing it
fn contains_filter(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(filter) => value.is_some_and(|value| value.to_lowercase().contains(filter)),
    }
}

/// Matchable members of one union with their property units, in id order.
pub struct MemberDirectory {
    members: Vec<(MemberModel, Vec<MemberPropertyUnitModel>)>,
}

impl MemberDirectory {
    /// Indexes members with their property units, in the order given
    pub fn new(members: Vec<(MemberModel, Vec<MemberPropertyUnitModel>)>) -> Self {
        Self { members }
    }

    /// Number of members in the directory
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the union has no matchable members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds the member an uploaded row refers to.
    ///
    /// Candidates are members whose name equals the trimmed row name case-insensitively and,
    /// when the row carries an address, whose `property_address` contains it. The first
    /// candidate in id order wins when the row has no address filters; otherwise the first
    /// candidate with a property unit satisfying every supplied filter wins. Candidates
    /// without units are checked against their `property_address` instead.
    ///
    /// # Returns
    /// - `Some(member)` - First satisfying candidate
    /// - `None` - Blank name or no satisfying candidate
    pub fn find_match(&self, row: &BulkUploadRowDto) -> Option<&MemberModel> {
        let name = row.name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }

        let filters = RowFilters::from_row(row);

        self.members
            .iter()
            .filter(|(member, _)| member.name.trim().to_lowercase() == name)
            .filter(|(member, _)| {
                contains_filter(member.property_address.as_deref(), filters.address.as_deref())
            })
            .find(|(member, units)| {
                if filters.is_empty() {
                    true
                } else if units.is_empty() {
                    filters.matches_member_address(member.property_address.as_deref())
                } else {
                    units.iter().any(|unit| filters.matches_unit(unit))
                }
            })
            .map(|(member, _)| member)
    }
}
