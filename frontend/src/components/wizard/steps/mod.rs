mod code_preview;
mod column_count;
mod column_form;
mod table_preview;

pub use code_preview::code_preview;
pub use column_count::column_count_step;
pub use column_form::column_form_step;
pub use table_preview::preview_step;
