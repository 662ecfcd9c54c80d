use crate::logic::collation::locale_cmp;
use crate::logic::RepoError;
use crate::model::{is_blank, next_id, Establishment, Id, NewEstablishment};

/// Order establishments by name for display
pub fn sort_by_name(establishments: &mut [Establishment]) {
    establishments.sort_by(|a, b| locale_cmp(&a.name, &b.name));
}

/// Check the fields of a new establishment without touching stored records
pub fn validate_new_establishment(new: &NewEstablishment) -> Result<(), RepoError> {
    if is_blank(new.name.as_deref()) {
        return Err(RepoError::Validation(
            "Establishment name is required.".to_string(),
        ));
    }
    Ok(())
}

/// Append an already validated `new` with the next id, unless its name is taken
pub fn insert_establishment(
    establishments: &mut Vec<Establishment>,
    new: NewEstablishment,
) -> Result<Establishment, RepoError> {
    let lowered = new.name.as_deref().unwrap_or_default().to_lowercase();
    if establishments
        .iter()
        .any(|existing| existing.name.to_lowercase() == lowered)
    {
        return Err(RepoError::Duplicate(
            "This establishment has already been registered.".to_string(),
        ));
    }

    let id = next_id(establishments.iter().map(|e| e.id)).ok_or_else(|| {
        RepoError::Validation("No establishment ids remain.".to_string())
    })?;
    let establishment = new.into_establishment(id);
    establishments.push(establishment.clone());
    Ok(establishment)
}

/// Remove the establishment with `id`.
///
/// Quotations naming this establishment are deliberately left alone.
pub fn remove_establishment(
    establishments: &mut Vec<Establishment>,
    id: Id,
) -> Result<Establishment, RepoError> {
    match establishments.iter().position(|e| e.id == id) {
        Some(index) => Ok(establishments.remove(index)),
        None => Err(RepoError::NotFound("Establishment not found.".to_string())),
    }
}
