pub mod artworks;
pub mod category;
pub mod endpoints;
pub mod filter;
pub mod notifications;
