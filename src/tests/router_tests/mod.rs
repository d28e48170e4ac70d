mod contact_tests;
mod listings_tests;
mod page_tests;
