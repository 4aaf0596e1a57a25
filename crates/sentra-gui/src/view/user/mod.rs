//! User screens: list with filters, create form, and detail.

mod detail;
mod list;
mod new;

pub use detail::view_user_detail;
pub use list::view_users;
pub use new::view_user_new;

use std::fmt;

/// Company option for the pick lists on the user and video forms.
///
/// [`iced::widget::pick_list`] needs `Display + PartialEq`, which the
/// raw company ids do not give us on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompanyChoice {
    pub id: Option<String>,
    pub name: String,
}

impl CompanyChoice {
    pub fn all() -> Self {
        Self {
            id: None,
            name: "All companies".to_string(),
        }
    }

    pub fn from_companies(companies: &[sentra_api::schema::Company]) -> Vec<Self> {
        companies
            .iter()
            .map(|company| Self {
                id: Some(company.id.clone()),
                name: company.name.clone(),
            })
            .collect()
    }
}

impl fmt::Display for CompanyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
