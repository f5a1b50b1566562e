//! Page Components

mod checkout;
mod landing;

pub use checkout::CheckoutPage;
pub use landing::LandingPage;
