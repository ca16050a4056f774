//! Page sections, one module per visual block.

mod about;
mod avatar;
mod featured;
mod footer;
mod header;
mod hero;
mod highlights;
mod icons;
mod services;
mod stats;
mod testimonials;

pub use about::About;
pub use featured::Featured;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use highlights::Highlights;
pub use services::Services;
pub use stats::Stats;
pub use testimonials::Testimonials;
