pub mod home;
pub mod mail;
pub mod routes;

pub use home::Home;
pub use mail::Mail;
