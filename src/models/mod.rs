pub mod doctors;
pub mod patients;
pub mod users;

pub mod user_logins;
