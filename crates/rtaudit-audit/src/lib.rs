mod gaps;
mod regroup;
mod render;

pub use gaps::find_gaps;
pub use regroup::regroup;
pub use render::{render_report, render_report_to_string};
