pub mod expired;
pub mod forms;
pub mod landing;

pub use expired::SessionExpiredPage;
pub use forms::FormsPage;
pub use landing::LandingPage;
