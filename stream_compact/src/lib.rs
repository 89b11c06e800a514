mod buffer;
pub mod compact;
mod error;
pub mod scan;
pub mod timing;

pub use compact::compact;
pub use error::Error;
pub use scan::scan;
