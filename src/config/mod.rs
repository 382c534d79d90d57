//! Configuration module

mod site;

pub use site::EmbedsConfig;
pub use site::HeadingPolicy;
pub use site::SiteConfig;
