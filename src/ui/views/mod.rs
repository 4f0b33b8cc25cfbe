pub mod achievements;
pub mod dashboard;
pub mod interviews;
pub mod loading;
pub mod practice;
pub mod question;
