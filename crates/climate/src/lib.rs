pub mod db;
mod reference;
pub mod routes;
mod service;
mod startup;
pub mod templates;
mod utils;

pub use db::*;
pub use reference::*;
pub use routes::*;
pub use service::*;
pub use startup::*;
pub use utils::*;
