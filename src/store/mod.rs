pub mod xml_store;

pub use xml_store::{Document, XmlStore};
