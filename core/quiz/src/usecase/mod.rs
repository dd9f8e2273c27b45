pub mod app;
pub mod assemble;
pub mod audit;
pub mod report;
pub mod sample;
pub mod scan;
