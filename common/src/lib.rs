//! MineSweeper Common Library
//!
//! CLIとWeb(WASM)で共有される型とワークフローロジック

pub mod types;
pub mod error;
pub mod query;
pub mod endpoint;
pub mod response;
pub mod state;
pub mod report;

pub use types::{AnalysisDetails, AnalysisResult, AnalyzeRequest, Candidate, ErrorBody};
pub use error::{Error, Result};
pub use query::{Query, QueryError, EMPTY_QUERY_NOTICE};
pub use endpoint::Endpoints;
pub use response::{decode_response, ApiError, Phase};
pub use state::{Ticket, UiState, ViewState};
pub use report::{format_score, DetailLine, ResultReport, RiskColor};
