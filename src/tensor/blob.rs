use super::{element::Element, tensor_data::TensorData, tensor_desc::TensorDesc};

// 4D tensor with paired value and gradient buffers of the same shape
pub struct Blob<T: Element> {
    desc: TensorDesc,
    values: TensorData<T>,
    gradients: TensorData<T>,
}

impl<T: Element> Blob<T> {
    pub fn new(desc: TensorDesc) -> Self {
        Self {
            desc,
            values: TensorData::zeroed(desc.num_elements()),
            gradients: TensorData::zeroed(desc.num_elements()),
        }
    }

    // No storage, e.g. a layer output before reshape
    pub fn unallocated() -> Self {
        Self {
            desc: TensorDesc::default(),
            values: TensorData::Unallocated,
            gradients: TensorData::Unallocated,
        }
    }

    pub fn from_values(desc: TensorDesc, values: Vec<T>) -> Self {
        assert_eq!(
            desc.num_elements(),
            values.len(),
            "shape {} is incompatible with {} values",
            desc,
            values.len()
        );
        Self {
            desc,
            values: TensorData::Cpu(values),
            gradients: TensorData::zeroed(desc.num_elements()),
        }
    }

    // Previous contents are discarded
    pub fn reshape(&mut self, desc: TensorDesc) {
        self.desc = desc;
        self.values = TensorData::zeroed(desc.num_elements());
        self.gradients = TensorData::zeroed(desc.num_elements());
    }

    pub fn desc(&self) -> &TensorDesc {
        &self.desc
    }

    pub fn num(&self) -> usize {
        self.desc.num
    }

    pub fn channels(&self) -> usize {
        self.desc.channels
    }

    pub fn height(&self) -> usize {
        self.desc.height
    }

    pub fn width(&self) -> usize {
        self.desc.width
    }

    pub fn count(&self) -> usize {
        self.desc.num_elements()
    }

    pub fn is_allocated(&self) -> bool {
        self.values.is_allocated()
    }

    pub fn offset(&self, n: usize) -> usize {
        self.desc.offset(n)
    }

    pub fn offset_at(&self, n: usize, c: usize, h: usize, w: usize) -> usize {
        self.desc.offset_at(n, c, h, w)
    }

    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        self.values.as_mut_slice()
    }

    pub fn gradients(&self) -> &[T] {
        self.gradients.as_slice()
    }

    pub fn gradients_mut(&mut self) -> &mut [T] {
        self.gradients.as_mut_slice()
    }

    pub fn item_values(&self, n: usize) -> &[T] {
        let start = self.offset(n);
        &self.values()[start..start + self.desc.item_elements()]
    }

    pub fn item_gradients(&self, n: usize) -> &[T] {
        let start = self.offset(n);
        &self.gradients()[start..start + self.desc.item_elements()]
    }
}

impl<T: Element> std::fmt::Debug for Blob<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("desc", &self.desc)
            .field("dtype", &T::NAME)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_discards_previous_contents() {
        let mut blob = Blob::from_values(TensorDesc::new(1, 1, 1, 2), vec![1.0f32, 2.0]);
        blob.gradients_mut()[0] = 5.0;

        blob.reshape(TensorDesc::new(2, 1, 1, 2));

        assert_eq!(blob.count(), 4);
        assert_eq!(blob.values(), &[0.0; 4]);
        assert_eq!(blob.gradients(), &[0.0; 4]);
    }

    #[test]
    fn unallocated_blob_has_empty_buffers() {
        let blob = Blob::<f64>::unallocated();
        assert!(!blob.is_allocated());
        assert!(blob.values().is_empty());
        assert!(blob.gradients().is_empty());
    }

    #[test]
    fn item_slices_follow_offsets() {
        let blob = Blob::from_values(TensorDesc::new(2, 1, 1, 3), vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(blob.offset(1), 3);
        assert_eq!(blob.item_values(1), &[4.0, 5.0, 6.0]);
        assert_eq!(blob.item_gradients(0), &[0.0; 3]);
    }

    #[test]
    fn shape_accessors_follow_desc() {
        let mut blob = Blob::<f32>::new(TensorDesc::new(2, 3, 4, 5));
        assert_eq!((blob.num(), blob.channels(), blob.height(), blob.width()), (2, 3, 4, 5));

        let at = blob.offset_at(1, 2, 3, 4);
        blob.values_mut()[at] = 1.0;
        assert_eq!(at, blob.count() - 1);
        assert_eq!(blob.item_values(1)[59], 1.0);
    }

    #[test]
    #[should_panic(expected = "channel index 3 out of range")]
    fn offset_at_checks_coordinates() {
        Blob::<f64>::new(TensorDesc::new(2, 3, 4, 5)).offset_at(1, 3, 0, 0);
    }

    #[test]
    #[should_panic(expected = "incompatible with 3 values")]
    fn from_values_checks_length() {
        Blob::from_values(TensorDesc::new(2, 1, 1, 2), vec![1.0f32, 2.0, 3.0]);
    }
}
