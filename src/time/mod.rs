mod date;
pub use date::*;
mod time_stamp;
pub use time_stamp::*;
mod time_span;
pub use time_span::*;
