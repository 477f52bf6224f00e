pub mod aligner;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod filtering;
pub mod record;
pub mod splits;
pub mod writer;
