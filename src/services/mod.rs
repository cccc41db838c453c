pub mod excel;
pub mod input_files;
pub mod report;
