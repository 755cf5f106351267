//! Core domain types consumed by the resolvers and the converter seam.
pub mod params;
