pub mod fs;
pub mod parse;
pub mod time;
