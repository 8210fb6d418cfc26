//! Data models for the academic record

pub mod assessment;
mod coerce;
pub mod module;
pub mod record;
pub mod year;

pub use assessment::Assessment;
pub use module::Module;
pub use record::AcademicRecord;
pub use year::Year;

/// Find the position of the item a selector refers to.
///
/// A selector is either an id or a name. An id match anywhere in `items`
/// wins over a name match; names compare case-insensitively after trimming.
fn find_index<T>(items: &[T], selector: &str, key: impl Fn(&T) -> (u64, &str)) -> Option<usize> {
    let selector = selector.trim();
    if let Ok(id) = selector.parse::<u64>() {
        if let Some(pos) = items.iter().position(|item| key(item).0 == id) {
            return Some(pos);
        }
    }
    let wanted = selector.to_lowercase();
    items
        .iter()
        .position(|item| key(item).1.trim().to_lowercase() == wanted)
}
