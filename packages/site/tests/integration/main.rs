mod localizer_tests;
mod page_tests;
