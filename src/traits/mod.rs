pub mod sink;
pub mod source;
pub mod transform;

pub use sink::OutputSink;
pub use source::SourceProvider;
pub use transform::Transform;
