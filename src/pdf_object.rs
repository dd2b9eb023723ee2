use crate::Error;
use lopdf::{Document, Object};

pub(super) trait PdfObjectDeref {
    fn deref<'a>(&'a self, doc: &'a Document) -> Result<&'a Object, Error>;

    /// Integer or real as `f32`.
    fn as_number(&self) -> Result<f32, Error>;
}

impl PdfObjectDeref for Object {
    fn deref<'a>(&'a self, doc: &'a Document) -> Result<&'a Object, Error> {
        match *self {
            Object::Reference(oid) => doc
                .objects
                .get(&oid)
                .ok_or_else(|| Error::Other(format!("PDF Error: NoSuchReference({:#?})", oid))),
            _ => Ok(self),
        }
    }

    fn as_number(&self) -> Result<f32, Error> {
        match *self {
            Object::Integer(value) => Ok(value as f32),
            Object::Real(value) => Ok(value as f32),
            _ => Err(Error::Other("PDF Error: expected a number.".to_owned())),
        }
    }
}
