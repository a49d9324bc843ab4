pub mod carousel;
pub mod constants;
pub mod layout;
pub mod pointer;
pub mod scroll;
pub mod uniforms;
pub mod viewport;

pub use carousel::*;
pub use constants::*;
pub use layout::*;
pub use pointer::*;
pub use scroll::*;
pub use uniforms::*;
pub use viewport::*;
