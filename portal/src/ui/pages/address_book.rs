//! Address book page of the user-facing app.

use pagination::Paginated;

use crate::context::AppContext;
use crate::domain::ports::RemoteCallError;
use crate::domain::{Address, DateTimeLocale, UserId};
use crate::ui::layout::LayoutShell;
use crate::ui::view::View;

/// Route of the address book.
pub const ADDRESS_BOOK_PATH: &str = "/account/addresses";

const COLUMNS: [&str; 7] = [
    "Type",
    "Address",
    "City",
    "Postal code",
    "Country",
    "Phone",
    "Updated",
];

/// Fetch `user_id`'s addresses through the context and compose the page.
///
/// # Errors
///
/// Returns the service's [`RemoteCallError`] unchanged.
pub async fn address_book(
    context: &AppContext,
    user_id: &UserId,
) -> Result<View, RemoteCallError> {
    let page = context.addresses().list_for_user(user_id).await?;
    Ok(LayoutShell::account().compose(
        ADDRESS_BOOK_PATH,
        address_section(page.into_inner(), context.locale()),
    ))
}

/// Section listing one page of addresses.
///
/// Metadata is shown as reported; the page never fetches neighbours, it only
/// mentions that they exist.
pub fn address_section(page: Paginated<Address>, locale: DateTimeLocale) -> View {
    if page.is_empty() {
        return View::section("Addresses", vec![View::text("No addresses saved yet.")]);
    }

    let (rows, meta) = page
        .map(|address| address_row(&address, locale))
        .into_parts();
    let mut children = vec![
        View::Table {
            columns: COLUMNS.iter().map(|column| (*column).to_owned()).collect(),
            rows,
        },
        View::text(format!(
            "Page {} of {} ({} addresses)",
            meta.page, meta.total_pages, meta.total
        )),
    ];
    let neighbours: Vec<&str> = [
        (meta.has_previous_page(), "previous page"),
        (meta.has_next_page(), "next page"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect();
    if !neighbours.is_empty() {
        children.push(View::text(format!(
            "Also available: {}",
            neighbours.join(" and ")
        )));
    }
    View::section("Addresses", children)
}

fn address_row(address: &Address, locale: DateTimeLocale) -> Vec<String> {
    let category = if address.is_soft_deleted() {
        format!("{} (deleted)", address.address_type)
    } else {
        address.address_type.clone()
    };
    vec![
        category,
        address.street(),
        address.city.clone(),
        address.postal_code.clone(),
        address.country.clone(),
        address.phone_number.clone().unwrap_or_else(|| "-".to_owned()),
        locale.format_date_time(&address.updated_at),
    ]
}
