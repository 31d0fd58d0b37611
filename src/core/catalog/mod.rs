//! Static lookup tables shipped with the service.

pub mod crop_facts;
pub mod disease_info;
pub mod district;
pub mod season;
