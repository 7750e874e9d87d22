//! Processing primitives: the corner scanner (`scan`) and the crop-box
//! resolver (`resolve`). One produces the four corner reports the other
//! consumes.
pub mod resolve;
pub mod scan;
