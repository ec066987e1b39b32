mod home;
mod pilot;
mod privacy;

pub use home::HomePage;
pub use pilot::PilotPage;
pub use privacy::PrivacyPage;
