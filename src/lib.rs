pub mod catalog;
pub mod cleaning;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;
