mod console_test;
mod report_test;
