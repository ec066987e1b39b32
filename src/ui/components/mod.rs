//! Shared presentational components

mod countdown;
mod faq;
mod footer;
mod header;
mod section;

pub use countdown::CountdownBanner;
pub use faq::FaqSection;
pub use footer::Footer;
pub use header::Header;
pub use section::{FeatureCard, PilotCard, SectionContainer, Timeline, TimelineStep};
