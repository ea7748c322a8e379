pub mod campus;
pub mod coords;
pub mod details;
pub mod form;
pub mod listing;
pub mod sidebar;
pub mod view;
