pub mod charts;
pub mod panels;
pub mod report;
pub mod table;
