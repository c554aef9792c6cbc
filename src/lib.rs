//! equipscout - front photos and spec sheets for industrial equipment.
//!
//! Given a manufacturer, model number, equipment type and voltage rating,
//! searches the web for product photos, keeps the one whose edges are most
//! left/right symmetric, and locates a PDF specification sheet.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod http_client;
pub mod models;
pub mod ranking;
pub mod server;
pub mod services;
