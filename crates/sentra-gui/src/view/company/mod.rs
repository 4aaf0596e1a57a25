//! Company screens: list, create form, and detail.

mod detail;
mod list;
mod new;

pub use detail::view_company_detail;
pub use list::view_companies;
pub use new::view_company_new;
