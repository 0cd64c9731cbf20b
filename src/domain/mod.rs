// Domain types: the user's selection and calendar-period helpers

pub mod form;
pub mod months;

pub use form::{FormState, Selection};
pub use months::{long_month_label, shift_months, short_month_label};
