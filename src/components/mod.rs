pub mod review_form;
pub mod reviews_table;
