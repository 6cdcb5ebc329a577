use crate::tensor::{Blob, Element, TensorDesc};

pub trait Layer<T: Element>: Send {
    // Return a string representation of the layers name
    fn name(&self) -> String;

    // Return optional configuration details for the layer
    fn config_string(&self) -> Option<String> {
        None
    }

    // For graph verification, how many inputs this layer requires (min and max)
    fn input_requirements(&self) -> (usize, Option<usize>);

    // How many outputs this layer produces (min and max)
    fn output_requirements(&self) -> (usize, Option<usize>) {
        (1, Some(1))
    }

    // Bytes needed for the outputs' values and gradients
    fn memory_requirements(&self, output_shape: &TensorDesc) -> u64 {
        2 * output_shape.size_in_bytes::<T>() as u64
    }

    // Validate the inputs and size the outputs to match
    fn reshape(&mut self, bottom: &[Blob<T>], top: &mut [Blob<T>]);

    fn forward(&self, bottom: &[Blob<T>], top: &mut [Blob<T>]);

    // propagate_down holds one flag per entry of bottom
    fn backward(&self, top: &[Blob<T>], propagate_down: &[bool], bottom: &mut [Blob<T>]);
}
