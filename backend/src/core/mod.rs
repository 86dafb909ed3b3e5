//! Core modelling primitives shared by every component

pub mod horizon;
