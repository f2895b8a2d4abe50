pub mod tensor;

pub use tensor::{normalize, ClassificationTensor, TENSOR_LEN, TENSOR_SHAPE, TENSOR_SIDE};
