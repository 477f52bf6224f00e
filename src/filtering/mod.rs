/*! Filtering utilities

Filters operate on aligned [crate::record::Record]s, after blank pairs have been dropped.
They are passed to [crate::dataset::TranslationDataset::with_filter] to restrict the examples a dataset keeps.

Filters implement [filter::Filter]: they are pure, so the same record always gets the same answer.
! */
mod filter;
mod length;

pub use filter::Filter;
pub use length::Length;
