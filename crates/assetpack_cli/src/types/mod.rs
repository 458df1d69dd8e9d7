pub mod report_format;
