pub mod gallery;
pub mod preview_card;
