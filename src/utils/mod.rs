mod paths;
mod png_io;

pub use paths::*;
pub use png_io::*;
