pub mod gate;
pub mod response;

pub use gate::{admin_gate_middleware, GateDecision};
pub use response::{ApiResponse, ApiResult};
