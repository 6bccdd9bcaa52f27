// ============================================================================
// Domain Models Module
// Operands, operators, limits and the error taxonomy
// ============================================================================

pub mod config;
pub mod error;
pub mod operand;
pub mod operator;

pub use config::OperandLimits;
pub use error::CalcError;
pub use operand::{parse_operand, Side};
pub use operator::Operator;
