//! roomscape: procedural room scenes from free-text descriptions and
//! reference photos.
//!
//! The pipeline is linear per user action: text goes through the keyword
//! [`extractor`], photos through the [`imaging`] summarizer, and the
//! [`composer`] turns the resulting attribute record (plus the optional
//! image summary) into a declarative [`scene`] for an external viewer. The
//! [`session`] controller wires the pieces together and owns the state
//! machine between requests.

pub mod composer;
pub mod extractor;
pub mod imaging;
pub mod scene;
pub mod session;
pub mod viewer;

pub use composer::compose;
pub use extractor::{extract, format_extracted_info, generate_prompt_from_info, AttributeRecord};
pub use imaging::{normalize, summarize, summarize_file, ImageSummary, ImagingError};
pub use scene::{CameraPose, Light, Primitive, Rgb, Scene, Shape};
pub use session::{SessionConfig, SessionController, SessionPhase, SessionSnapshot};
pub use viewer::{SceneRenderer, ViewerSettings};
