pub mod draft;
pub mod limit;
pub mod parse;
pub mod saved;
pub mod session;
