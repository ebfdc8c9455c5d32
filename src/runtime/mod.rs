//! Applies controller effects to the transport, the retry timer and the view.

mod driver;
mod scheduler;

pub use driver::SessionDriver;
pub use scheduler::RetryScheduler;
