mod icon;
mod report;

pub use icon::*;
pub use report::*;
