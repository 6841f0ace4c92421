pub use cursor::{correlate, Cursor, Outcome};
pub use metric::{Metric, Mode, Output, Value};

mod cursor;
mod metric;
