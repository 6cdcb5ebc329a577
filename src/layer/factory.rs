use std::sync::Arc;

use crate::{
    compute::{ComputeConfig, CpuCompute},
    error::LayerError,
    tensor::Element,
};

use super::{layer::Layer, switch::SwitchLayer};

// Names model descriptions can refer to
const REGISTERED: &[&str] = &["Switch"];

pub struct Layers;

impl Layers {
    pub fn switch<T: Element>() -> Box<dyn Layer<T>> {
        Box::new(SwitchLayer::new())
    }

    pub fn switch_with<T: Element>(config: ComputeConfig) -> Result<Box<dyn Layer<T>>, LayerError> {
        let compute = CpuCompute::new(config)?;
        Ok(Box::new(SwitchLayer::new_with(Arc::new(compute))))
    }

    pub fn switch_shared<T: Element>(compute: Arc<CpuCompute>) -> Box<dyn Layer<T>> {
        Box::new(SwitchLayer::new_with(compute))
    }

    pub fn by_name<T: Element>(name: &str) -> Option<Box<dyn Layer<T>>> {
        match name {
            "Switch" => Some(Self::switch()),
            _ => None,
        }
    }

    pub fn registered_names() -> &'static [&'static str] {
        REGISTERED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::TensorDesc;

    #[test]
    fn switch_is_registered_for_both_precisions() {
        let single = Layers::by_name::<f32>("Switch").unwrap();
        let double = Layers::by_name::<f64>("Switch").unwrap();
        assert_eq!(single.name(), "Switch");
        assert_eq!(double.input_requirements(), (3, None));
        assert_eq!(double.output_requirements(), (1, Some(1)));
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(Layers::by_name::<f32>("Concat").is_none());
        assert_eq!(Layers::registered_names(), &["Switch"]);
        for name in Layers::registered_names() {
            assert!(Layers::by_name::<f64>(name).is_some());
        }
    }

    #[test]
    fn memory_covers_output_values_and_gradients() {
        let output = TensorDesc::new(2, 1, 1, 2);
        assert_eq!(Layers::switch::<f32>().memory_requirements(&output), 32);
        assert_eq!(Layers::switch::<f64>().memory_requirements(&output), 64);
        assert_eq!(Layers::switch::<f64>().memory_requirements(&TensorDesc::default()), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ComputeConfig { threads: 0, ..Default::default() };
        assert!(Layers::switch_with::<f32>(config).is_err());
    }
}
