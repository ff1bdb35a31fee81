mod fetch;
mod status;
mod verify;

pub use fetch::run_fetch;
pub use status::run_status;
pub use verify::run_verify;
