use swasthya_core::models::medicine::{Medicine, Savings};

use crate::directory::medicines;

/// The first non-branded medicine with the same generic name. Only branded
/// medicines have an alternative.
pub fn generic_alternative(medicine: &Medicine) -> Option<&'static Medicine> {
    if !medicine.is_branded {
        return None;
    }
    medicines()
        .iter()
        .find(|m| !m.is_branded && m.generic_name == medicine.generic_name)
}

/// Saving from buying the generic instead of `branded`, from the branded
/// entry's own `generic_price`. Zero when it has none.
pub fn savings(branded: &Medicine) -> Savings {
    let Some(generic_price) = branded.generic_price else {
        return Savings::default();
    };
    if branded.price == 0 {
        return Savings::default();
    }

    let amount = i64::from(branded.price) - i64::from(generic_price);
    let percentage = (amount as f64 / f64::from(branded.price) * 100.0).round() as i64;
    Savings { amount, percentage }
}
