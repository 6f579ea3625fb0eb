//! Jekyll documents generated from the merged data.

pub mod page;
pub mod person;

pub use page::{DEFAULT_BATCH_SIZE, render_page};
pub use person::render_person;
