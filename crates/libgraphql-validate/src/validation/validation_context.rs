use crate::ast::Document;
use crate::schema::Schema;
use crate::validation::TypeInfo;

/// The read-only view of one validation that rules and visitors receive: the
/// schema, the document and the current [`TypeInfo`].
#[derive(Debug)]
pub struct ValidationContext<'a> {
    pub(super) document: &'a Document,
    pub(super) schema: &'a Schema,
    pub(super) type_info: TypeInfo<'a>,
}
impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a Document) -> Self {
        Self {
            document,
            schema,
            type_info: TypeInfo::new(schema),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }
}
