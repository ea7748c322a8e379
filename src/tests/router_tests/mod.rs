mod api_tests;
mod board_tests;
mod listing_form_tests;
