pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod project_modal;
pub mod projects;
pub mod skills;
