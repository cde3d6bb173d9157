//! Configuration module

mod site;

pub use site::CmsConfig;
pub use site::SiteConfig;
pub use site::Viewport;
pub use site::{ACCESS_TOKEN_ENV, SPACE_ID_ENV};
