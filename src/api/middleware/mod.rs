pub mod timeout;

pub use timeout::TimeoutMiddleware;
