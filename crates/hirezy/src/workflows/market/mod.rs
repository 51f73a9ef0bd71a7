//! Skill demand across the hiring market, with search/category filtering.

pub mod demo;
pub mod domain;
mod export;
pub mod router;
pub mod service;

pub use demo::demo_market_insights;
pub use domain::{DemandTrend, MarketFilter, MarketInsights, RegionDemand, SkillDemand};
pub use router::market_router;
pub use service::{MarketDemandService, MarketServiceError};
