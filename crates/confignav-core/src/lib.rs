pub mod config;
pub mod dispatch;
pub mod error;
pub mod navigator;
pub mod provider;
pub mod route;
pub mod types;

pub use dispatch::{Dispatch, RouteDispatcher, UnmatchedPolicy};
pub use error::{NavError, Result};
pub use navigator::{BrowserNavigator, MemoryNavigator, Navigator};
pub use provider::{EnvIdProvider, FixedId, IdProvider, NoId};
pub use types::{ConfigId, RouteTag};
