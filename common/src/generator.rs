//! # Synthetic Data Port
//!
//! Source of plausible but fake values used to populate demo entities.
//! Kept behind a trait so tests can substitute a scripted source.

pub trait DataGenerator {
    fn company_name(&mut self) -> String;

    fn catch_phrase(&mut self) -> String;

    /// A person's first and last name.
    fn full_name(&mut self) -> String;

    /// Latitude as a decimal string, e.g. `"-33.8650"`.
    fn latitude(&mut self) -> String;

    /// Longitude as a decimal string, e.g. `"151.2094"`.
    fn longitude(&mut self) -> String;
}
