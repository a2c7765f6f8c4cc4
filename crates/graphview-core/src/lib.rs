//! GraphView Core Library
//!
//! Shape model, JSON/XML decoders and the logical-to-device canvas layout
//! used by the GraphView renderer.

pub mod codec;
pub mod config;
pub mod device;
pub mod reader;
pub mod shapes;
pub mod style;
pub mod transform;

pub use codec::{DecodeError, ShapeFormat, decode};
pub use config::ViewerConfig;
pub use device::{DeviceGeometry, DeviceShape};
pub use reader::{LoadError, ShapeReader, ShapeSource};
pub use shapes::{Shape, ShapeError, ShapeKind, ShapeStyle};
pub use style::{ColorError, ResolvedStyle, resolve_color};
pub use transform::{CanvasTransform, place};
