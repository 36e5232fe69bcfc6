use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why a submitted guess produced no new row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SubmitFailure {
    Rejected { message: Option<String> }, // ok:false from the server
    Network,                              // request never completed
}
