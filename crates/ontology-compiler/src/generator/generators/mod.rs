//! Artifact generators (spec §4.4-§4.7): wikitext producers for the
//! semantic template, dispatcher, display stub, and the two form shapes.

mod dispatcher;
mod display_stub;
mod form_composite;
mod form_single;
mod input_mapper;
mod semantic_template;

pub use dispatcher::DispatcherGenerator;
pub use display_stub::DisplayStubGenerator;
pub use semantic_template::SemanticTemplateGenerator;

pub mod forms {
  pub use super::form_composite::{emit as composite, form_name};
  pub use super::form_single::emit as single;
}
