pub mod components;
pub mod layouts;
pub mod pages;

// Demo app with the navigation menu mounted in its layout
pub use pages::routes::App;
