//! API route declarations (e.g., /api/*)

pub mod disease_routes;
pub mod recommendation_routes;
pub mod risk_routes;
pub mod system_routes;
