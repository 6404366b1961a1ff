//! Page Components

mod home;
mod success;

pub use home::HomePage;
pub use success::SuccessPage;
