pub mod delimited;
pub mod quality;

pub use delimited::write_delimited_table;
pub use quality::render_quality_report;
