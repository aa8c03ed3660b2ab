pub mod geocode;
pub mod geom;
