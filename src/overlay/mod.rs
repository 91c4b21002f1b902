pub mod feature;
pub mod layer;
pub mod location;
pub mod output;
