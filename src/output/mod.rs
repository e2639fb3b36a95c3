//! Output encoders (CSV point table, text report).

mod report;
mod table;

pub use report::Report;
pub use table::{PointRow, PointTable};
