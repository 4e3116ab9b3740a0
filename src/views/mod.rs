pub mod detail;
pub mod results;
pub mod saved;
