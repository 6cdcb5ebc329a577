pub mod blob;
pub mod element;
pub mod filler;
pub mod tensor_data;
pub mod tensor_desc;

pub use blob::Blob;
pub use element::Element;
pub use filler::Filler;
pub use tensor_desc::TensorDesc;
