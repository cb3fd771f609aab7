use pdf_writer::{Name, Ref};

/// Indirect-object reference for one registered Helvetica face. The PostScript
/// base-font name doubles as the resource-dictionary key.
#[derive(Debug, Clone, Copy)]
pub struct FontReference<'a> {
    pub id: Ref,
    pub name: Name<'a>,
}
