//! afya-rest - REST-backed session controller and domain services.
//!
//! Everything here talks to the backend over HTTPS with the bearer tokens
//! held in an [`afya_core::TokenStore`]. The [`SessionController`] owns the
//! sign-in/sign-out lifecycle; the [`resources`] services cover the domain
//! endpoints.

mod auth;
mod client;
mod endpoints;
pub mod resources;
mod session;

pub use auth::AuthApi;
pub use client::RestClient;
pub use session::SessionController;
