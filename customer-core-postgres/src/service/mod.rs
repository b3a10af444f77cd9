pub mod lifecycle;

pub use lifecycle::CustomerLifecycleImpl;
