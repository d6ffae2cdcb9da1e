//! Domain layer - Profit-charging MSR math.
//!
//! Pure functions of their inputs: scalar transforms, the L1 metric,
//! the implicit cost solver and the trade evaluator. No I/O here
//! (hexagonal architecture inner ring).

pub mod distance;
pub mod error;
pub mod msr;
pub mod solver;
pub mod transforms;

// Re-export core types for convenience
pub use distance::l1_distance;
pub use error::{MsrError, MsrResult};
pub use msr::{evaluate_trade, MsrMarket, TradeResult};
pub use solver::{solve_cost, CostResult, SolverConfig};
pub use transforms::{liquidity_scale, profit_charge, utility};
