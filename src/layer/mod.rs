pub mod factory;
pub mod layer;
pub mod switch;

pub use factory::Layers;
pub use layer::Layer;
pub use switch::{SwitchBottom, SwitchBottomMut, SwitchLayer};
