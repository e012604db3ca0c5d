pub mod output;
pub mod tables;
