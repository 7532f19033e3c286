//! Client-side filtering for the dashboard table.

use crate::model::Enquiry;

/// Enquiries whose name, email, phone or message contain `term`,
/// case-insensitively, in list order. A blank term matches everything; otherwise
/// surrounding whitespace is part of the term.
pub fn filter_enquiries<'a>(enquiries: &'a [Enquiry], term: &str) -> Vec<&'a Enquiry> {
    if term.trim().is_empty() {
        return enquiries.iter().collect();
    }
    let needle = term.to_lowercase();
    enquiries
        .iter()
        .filter(|enquiry| contains_term(enquiry, &needle))
        .collect()
}

fn contains_term(enquiry: &Enquiry, needle: &str) -> bool {
    [
        &enquiry.name,
        &enquiry.email,
        &enquiry.phone,
        &enquiry.message,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
