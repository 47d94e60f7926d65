mod builders;

pub use builders::EnvelopeBuilder;
