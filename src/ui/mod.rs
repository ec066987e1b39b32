//! View layer: shared presentational components and the three pages

pub mod access_gate;
pub mod components;
pub mod contact;
pub mod loi_embed;
pub mod pages;
