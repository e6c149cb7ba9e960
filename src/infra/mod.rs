pub mod csv;
pub mod fs;
