pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod project_detail;
pub mod projects;
pub mod skills;
