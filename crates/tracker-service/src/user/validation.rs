//! Validation of user patches and list filters.

use std::collections::BTreeMap;

use tracker_core::error::AppError;
use tracker_entity::user::{UpdateUser, UserFilter};

/// Largest passport serie accepted on update.
pub const MAX_PASSPORT_SERIE: i32 = 9_999;
/// Largest passport number accepted on update.
pub const MAX_PASSPORT_NUMBER: i32 = 999_999;

/// Check the present fields of a patch.
///
/// Strings must not be blank and passport integers must fit their digit
/// count. All offending fields are reported at once.
pub fn validate_update(patch: &UpdateUser) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();

    check_not_blank(
        &mut errors,
        [
            ("name", &patch.name),
            ("surname", &patch.surname),
            ("patronymic", &patch.patronymic),
            ("address", &patch.address),
        ],
    );

    if patch
        .passport_serie
        .is_some_and(|v| !(0..=MAX_PASSPORT_SERIE).contains(&v))
    {
        errors.insert(
            "passportSerie".to_string(),
            format!("must be between 0 and {MAX_PASSPORT_SERIE}"),
        );
    }
    if patch
        .passport_number
        .is_some_and(|v| !(0..=MAX_PASSPORT_NUMBER).contains(&v))
    {
        errors.insert(
            "passportNumber".to_string(),
            format!("must be between 0 and {MAX_PASSPORT_NUMBER}"),
        );
    }

    into_result(errors)
}

/// Check the present fields of a list filter.
///
/// Strings must not be blank and passport integers must not be negative.
pub fn validate_filter(filter: &UserFilter) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();

    check_not_blank(
        &mut errors,
        [
            ("name", &filter.name),
            ("surname", &filter.surname),
            ("patronymic", &filter.patronymic),
            ("address", &filter.address),
        ],
    );

    let ints = [
        ("passportSerie", filter.passport_serie),
        ("passportNumber", filter.passport_number),
    ];
    for (field, value) in ints {
        if value.is_some_and(|v| v < 0) {
            errors.insert(field.to_string(), "must not be negative".to_string());
        }
    }

    into_result(errors)
}

fn check_not_blank<'a>(
    errors: &mut BTreeMap<String, String>,
    fields: impl IntoIterator<Item = (&'static str, &'a Option<String>)>,
) {
    for (field, value) in fields {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            errors.insert(field.to_string(), "must not be blank".to_string());
        }
    }
}

fn into_result(errors: BTreeMap<String, String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::invalid_fields(errors))
    }
}
