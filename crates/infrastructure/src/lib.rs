//! Ferrous DNSLink Infrastructure Layer
pub mod naming;
