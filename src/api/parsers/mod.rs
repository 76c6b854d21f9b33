pub mod limit;

pub use limit::coerce_limit;
