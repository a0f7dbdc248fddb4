//! Startup consistency check between declared names and the location map.

use crate::declared::DeclaredSymbols;
use crate::error::Mismatch;
use crate::location::LocationMap;
use fxhash::FxHashSet;

/// Checks that every declared name is valid, declared once and has a
/// location, and that every location belongs to a declared name.
///
/// Mismatches come in declaration order, followed by undeclared names in
/// location-map order.
///
/// # Errors
/// Every [`Mismatch`] found, never just the first.
pub fn validate(declared: &DeclaredSymbols, locations: &LocationMap) -> Result<(), Vec<Mismatch>> {
    let mut mismatches = Vec::new();
    let mut seen = FxHashSet::default();

    for name in declared.all_names() {
        if !seen.insert(name.as_str()) {
            mismatches.push(Mismatch::Duplicate(name.clone()));
        } else if !name.is_valid() {
            mismatches.push(Mismatch::Invalid(name.clone()));
        } else if !locations.contains(name) {
            mismatches.push(Mismatch::Unmapped(name.clone()));
        }
    }

    mismatches.extend(
        locations
            .names()
            .filter(|name| !seen.contains(name.as_str()))
            .map(|name| Mismatch::Undeclared(name.clone())),
    );

    if mismatches.is_empty() { Ok(()) } else { Err(mismatches) }
}
