//! # Salesdash
//!
//! Backend service for the sales dashboard: a filtered, sorted, paginated
//! listing of sales representatives loaded from a static JSON document,
//! and an AI endpoint relaying free-text questions to a language-model
//! provider (or a deterministic placeholder in debug mode).
//!
//! ## Features
//!
//! - **Typed query engine**: filter (AND-combined), stable sort, paginate
//! - **Immutable record collection**: loaded once at startup, shared read-only
//! - **Pluggable AI provider**: OpenAI-compatible or placeholder, chosen by config
//! - **Environment configuration**: `.env`-aware, validated at startup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesdash::prelude::*;
//!
//! let config = AppConfig::from_env()?;
//! let records = Arc::new(salesdash::data::load(&config.data_file_path)?);
//! let ai = salesdash::ai::provider_from_config(&config)?;
//!
//! let state = AppState { records, ai };
//! let app = build_router(state, config.allowed_origins.clone());
//! salesdash::server::serve(app, &config.bind_addr).await?;
//! ```

pub mod ai;
pub mod config;
pub mod core;
pub mod data;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AiError, ConfigError, DashError, DashResult, DataError, RepPage, RepQuery, SalesRep,
        ValidationError,
    };

    // === AI providers ===
    pub use crate::ai::{AiProvider, OpenAiProvider, PlaceholderProvider, provider_from_config};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, AskRequest, AskResponse, build_router, serve};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use std::sync::Arc;

    // === Axum ===
    pub use axum::{
        Json, Router,
        extract::{Query, State},
        http::HeaderValue,
    };
}
