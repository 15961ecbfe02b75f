pub mod body;
pub mod envelope;

pub use body::Body;
pub use envelope::Envelope;
