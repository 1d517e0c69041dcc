mod shapes;
mod symbols;

pub use shapes::{ErrorShape, FaultSource, Member, OperationShape, RetryableMarker};
pub use symbols::{RustSymbols, Symbol, SymbolProvider};
