pub mod container;
pub mod footer;
pub mod link;

pub use container::Container;
pub use footer::Footer;
pub use link::LinkComponent;
