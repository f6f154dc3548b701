pub mod chart;
pub mod comparison;
pub mod record;
pub mod selection;
pub mod table;
pub mod totals;

pub use chart::*;
pub use comparison::*;
pub use record::*;
pub use selection::*;
pub use table::*;
pub use totals::*;
