use chrono::NaiveDate;

use crate::logic::collation::locale_cmp;
use crate::logic::RepoError;
use crate::model::{is_blank, next_id, Id, NewQuotation, Quotation, QuotationFilter, SortOrder};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter then sort quotations for a listing request.
///
/// `feedName` is a case-insensitive substring match, `date` an exact match,
/// and both must hold when given.
pub fn apply_filter(quotations: Vec<Quotation>, filter: &QuotationFilter) -> Vec<Quotation> {
    let feed_name = filter.feed_name().map(str::to_lowercase);
    let date = filter.date();

    let mut matching: Vec<Quotation> = quotations
        .into_iter()
        .filter(|q| {
            feed_name
                .as_deref()
                .map_or(true, |needle| q.feed_name.to_lowercase().contains(needle))
        })
        .filter(|q| date.map_or(true, |d| q.date == d))
        .collect();

    sort_quotations(&mut matching, filter.sort_order());
    matching
}

pub fn sort_quotations(quotations: &mut [Quotation], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => quotations.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => quotations.sort_by(|a, b| b.price.total_cmp(&a.price)),
        // YYYY-MM-DD strings order chronologically
        SortOrder::Default => quotations.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| locale_cmp(&a.feed_name, &b.feed_name))
        }),
    }
}

/// Check that every field of a new quotation is present and usable.
///
/// A price of exactly zero counts as missing, the same as an absent price.
pub fn validate_new_quotation(new: &NewQuotation) -> Result<(), RepoError> {
    let price_missing = match new.price {
        None => true,
        Some(price) => price == 0.0 || price.is_nan(),
    };

    if is_blank(new.feed_name.as_deref())
        || price_missing
        || is_blank(new.date.as_deref())
        || is_blank(new.establishment_name.as_deref())
    {
        return Err(RepoError::Validation(
            "All quotation fields are required.".to_string(),
        ));
    }

    if let Some(price) = new.price {
        if !price.is_finite() || price < 0.0 {
            return Err(RepoError::Validation(
                "Price must be a positive number.".to_string(),
            ));
        }
    }

    if let Some(date) = new.date.as_deref() {
        if !is_calendar_date(date) {
            return Err(RepoError::Validation(
                "Date must be a calendar date in YYYY-MM-DD form.".to_string(),
            ));
        }
    }

    Ok(())
}

fn is_calendar_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Append an already validated `new` with the next id
pub fn insert_quotation(
    quotations: &mut Vec<Quotation>,
    new: NewQuotation,
) -> Result<Quotation, RepoError> {
    let id = next_id(quotations.iter().map(|q| q.id))
        .ok_or_else(|| RepoError::Validation("No quotation ids remain.".to_string()))?;
    let quotation = new.into_quotation(id);
    quotations.push(quotation.clone());
    Ok(quotation)
}

pub fn remove_quotation(quotations: &mut Vec<Quotation>, id: Id) -> Result<Quotation, RepoError> {
    match quotations.iter().position(|q| q.id == id) {
        Some(index) => Ok(quotations.remove(index)),
        None => Err(RepoError::NotFound("Quotation not found.".to_string())),
    }
}
