use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-independent symbol classification.
///
/// Discriminants follow the LSP `SymbolKind` numbering so that providers which
/// conform to the protocol pass through unchanged.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
pub enum CanonicalKind {
    File = 1,
    Module = 2,
    Namespace = 3,
    Package = 4,
    Class = 5,
    Method = 6,
    Property = 7,
    Field = 8,
    Constructor = 9,
    Enum = 10,
    Interface = 11,
    Function = 12,
    Variable = 13,
    Constant = 14,
    String = 15,
    Number = 16,
    Boolean = 17,
    Array = 18,
    Object = 19,
    Key = 20,
    Null = 21,
    EnumMember = 22,
    Struct = 23,
    Event = 24,
    Operator = 25,
    TypeParameter = 26,
}

impl CanonicalKind {
    pub const ALL: [CanonicalKind; 26] = [
        CanonicalKind::File,
        CanonicalKind::Module,
        CanonicalKind::Namespace,
        CanonicalKind::Package,
        CanonicalKind::Class,
        CanonicalKind::Method,
        CanonicalKind::Property,
        CanonicalKind::Field,
        CanonicalKind::Constructor,
        CanonicalKind::Enum,
        CanonicalKind::Interface,
        CanonicalKind::Function,
        CanonicalKind::Variable,
        CanonicalKind::Constant,
        CanonicalKind::String,
        CanonicalKind::Number,
        CanonicalKind::Boolean,
        CanonicalKind::Array,
        CanonicalKind::Object,
        CanonicalKind::Key,
        CanonicalKind::Null,
        CanonicalKind::EnumMember,
        CanonicalKind::Struct,
        CanonicalKind::Event,
        CanonicalKind::Operator,
        CanonicalKind::TypeParameter,
    ];

    /// Kind used for codes that match nothing in the canonical address space.
    pub const GENERIC_CONTAINER: CanonicalKind = CanonicalKind::Object;

    /// Look up the canonical kind sharing a provider's numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        let idx = usize::try_from(code).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Kinds that structure a document (they own nested symbols).
    pub fn is_container(self) -> bool {
        matches!(
            self,
            CanonicalKind::File
                | CanonicalKind::Module
                | CanonicalKind::Namespace
                | CanonicalKind::Package
                | CanonicalKind::Class
                | CanonicalKind::Interface
                | CanonicalKind::Struct
                | CanonicalKind::Enum
                | CanonicalKind::Function
                | CanonicalKind::Method
                | CanonicalKind::Constructor
                | CanonicalKind::Object
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalKind::File => "File",
            CanonicalKind::Module => "Module",
            CanonicalKind::Namespace => "Namespace",
            CanonicalKind::Package => "Package",
            CanonicalKind::Class => "Class",
            CanonicalKind::Method => "Method",
            CanonicalKind::Property => "Property",
            CanonicalKind::Field => "Field",
            CanonicalKind::Constructor => "Constructor",
            CanonicalKind::Enum => "Enum",
            CanonicalKind::Interface => "Interface",
            CanonicalKind::Function => "Function",
            CanonicalKind::Variable => "Variable",
            CanonicalKind::Constant => "Constant",
            CanonicalKind::String => "String",
            CanonicalKind::Number => "Number",
            CanonicalKind::Boolean => "Boolean",
            CanonicalKind::Array => "Array",
            CanonicalKind::Object => "Object",
            CanonicalKind::Key => "Key",
            CanonicalKind::Null => "Null",
            CanonicalKind::EnumMember => "EnumMember",
            CanonicalKind::Struct => "Struct",
            CanonicalKind::Event => "Event",
            CanonicalKind::Operator => "Operator",
            CanonicalKind::TypeParameter => "TypeParameter",
        }
    }
}

impl fmt::Display for CanonicalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
