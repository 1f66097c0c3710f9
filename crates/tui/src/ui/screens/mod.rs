pub mod dashboard;
pub mod entry_form;
pub mod quick_add;
