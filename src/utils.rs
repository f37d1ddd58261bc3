pub mod escape_html;
pub use escape_html::escape_html;

pub mod open_source_reader;
pub use open_source_reader::open_source_reader;

pub mod sort_results;
pub use sort_results::{rank_order, sort_results};

pub mod write_frequencies_csv;
pub use write_frequencies_csv::write_frequencies_csv;
