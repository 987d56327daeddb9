use std::fmt;

/// Identifies a mapped class of the host program.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

#[derive(Debug, Clone)]
pub struct ClassArgs {
    pub id: ClassId,

    /// Class name as written in the host program
    pub name: String,

    /// The class this one structurally extends, if any.
    pub extends: Option<ClassId>,
}

impl From<&ClassArgs> for ClassId {
    fn from(value: &ClassArgs) -> Self {
        value.id
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
