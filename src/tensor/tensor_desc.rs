use std::fmt;

// Blobs are always 4D: num x channels x height x width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TensorDesc {
    pub num: usize,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl TensorDesc {
    pub fn new(num: usize, channels: usize, height: usize, width: usize) -> Self {
        Self { num, channels, height, width }
    }

    pub fn size_in_bytes<T>(&self) -> usize {
        self.num_elements() * std::mem::size_of::<T>()
    }

    pub fn num_elements(&self) -> usize {
        self.num * self.item_elements()
    }

    // Elements belonging to a single batch item
    pub fn item_elements(&self) -> usize {
        self.channels * self.height * self.width
    }

    pub fn to_dims(&self) -> Vec<usize> {
        vec![self.num, self.channels, self.height, self.width]
    }

    // n may equal num so that offset(num) is the end of the buffer
    pub fn offset(&self, n: usize) -> usize {
        assert!(n <= self.num, "batch index {} out of range for {}", n, self);
        n * self.item_elements()
    }

    pub fn offset_at(&self, n: usize, c: usize, h: usize, w: usize) -> usize {
        assert!(n < self.num, "batch index {} out of range for {}", n, self);
        assert!(c < self.channels, "channel index {} out of range for {}", c, self);
        assert!(h < self.height, "height index {} out of range for {}", h, self);
        assert!(w < self.width, "width index {} out of range for {}", w, self);
        ((n * self.channels + c) * self.height + h) * self.width + w
    }
}

impl fmt::Display for TensorDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}x{}", self.num, self.channels, self.height, self.width)
    }
}
