//! Core of the saham analysis workbench
//!
//! This crate holds the inference-independent heart of the workbench: input
//! validation, deterministic request composition, the verdict data model
//! with its schema contracts, the analysis and consistency engines, the
//! case archive, and local persistence.

pub mod archive;
pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod prompts;
pub mod result;
pub mod schema;
pub mod store;

pub use archive::CaseArchive;
pub use compose::{compose, ComposedRequest};
pub use config::WorkbenchConfig;
pub use engine::{order_by_time, AnalysisGateway, ConsistencyEngine, DEFAULT_MODEL};
pub use error::{AnalysisFailure, Result, WorkbenchError};
pub use input::{
    capital_fit, AdvisorySeverity, Bandarmology, CapitalAdvisory, CapitalTier, Fundamentals,
    RiskProfile, StockAnalysisInput, MIN_INTELLIGENCE_LEN,
};
pub use result::{
    AnalysisResult, BrokerAnalysis, ConsistencyResult, MarketCapAnalysis, MarketCapCategory,
    PlanStatus, Prediction, PredictionDirection, PriceInfo, Source, StressTest, Strategy,
    SupplyDemand, Timeframe, TradePlan, TrendVerdict,
};
pub use store::{ArchiveStore, BlobStore};
