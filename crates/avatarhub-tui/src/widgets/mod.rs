//! Custom widget components

mod avatar_card;
mod avatar_grid;
mod create_modal;
mod footer;
mod header;
pub mod modal_overlay;
mod search_input;
mod stats_card;

pub use avatar_card::AvatarCard;
pub use avatar_grid::{AvatarGrid, LOADING_TEXT};
pub use create_modal::CreateModal;
pub use footer::Footer;
pub use header::{header_branding, DashboardHeader, MobileMenu};
pub use search_input::SearchBar;
pub use stats_card::StatsCard;
