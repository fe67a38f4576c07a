pub mod home;
pub mod layouts;

pub use home::{endpoint_listing, home_page, Endpoint};
pub use layouts::{base, PageConfig};
