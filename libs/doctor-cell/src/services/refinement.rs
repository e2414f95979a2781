// libs/doctor-cell/src/services/refinement.rs
use crate::models::{DoctorRecord, RefinementCriteria, SortOption};

/// Derives the displayed doctor list: search on username, then exact
/// specialization match, then a stable sort. `full` is never modified.
pub fn refine(full: &[DoctorRecord], criteria: &RefinementCriteria) -> Vec<DoctorRecord> {
    let query = criteria.search_query.to_lowercase();

    let mut displayed: Vec<DoctorRecord> = full
        .iter()
        .filter(|doctor| query.is_empty() || doctor.username.to_lowercase().contains(&query))
        .filter(|doctor| {
            criteria.specialization.is_empty() || doctor.specialization == criteria.specialization
        })
        .cloned()
        .collect();

    match criteria.sort {
        SortOption::Experience => displayed.sort_by(|a, b| b.experience.cmp(&a.experience)),
        // Case-insensitive; byte order only breaks ties like "bob"/"Bob".
        SortOption::Name => displayed.sort_by(|a, b| {
            a.username
                .to_lowercase()
                .cmp(&b.username.to_lowercase())
                .then_with(|| a.username.cmp(&b.username))
        }),
        SortOption::None => {}
    }

    displayed
}
