//! Validation trait definition
//!
//! Configuration structures implement `Validate`; lists of them are checked
//! with `validate_each`, which prefixes the failing entry's position.

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Validate every item, reporting the first failure as `field[index]: reason`
pub fn validate_each<T: Validate>(field: &str, items: &[T]) -> Result<(), String> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| {
            item.validate()
                .map_err(|e| format!("{}[{}]: {}", field, index, e))
        })
}
