/// Keywords that introduce a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKeyword {
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            "delegate" => Some(Self::Delegate),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
        }
    }

    /// Whether declarations of this kind own a brace-delimited body that can
    /// contain method declarations. Enum bodies are member lists that would
    /// otherwise produce false method matches; delegates have no body at all.
    #[must_use]
    pub const fn has_method_body(self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Interface)
    }
}

/// What a `Declaration` introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Type(TypeKeyword),
    Method,
}

/// A lexically-recognized type or method introduction, extracted from
/// comment-stripped source text. Produced only by the scanner and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// Canonical flattened generic parameter list, empty for non-generic declarations.
    pub generic_suffix: String,
    /// Declaring type name, present only for methods.
    pub owner_type: Option<String>,
    /// 1-indexed declaration line.
    pub start_line: usize,
    /// 1-indexed last line of the brace range; equals `start_line` for
    /// bodyless declarations.
    pub end_line: usize,
}

impl Declaration {
    #[must_use]
    pub const fn new_type(
        keyword: TypeKeyword,
        name: String,
        generic_suffix: String,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self {
            kind: DeclKind::Type(keyword),
            name,
            generic_suffix,
            owner_type: None,
            start_line,
            end_line,
        }
    }

    #[must_use]
    pub const fn new_method(name: String, owner_type: String, line: usize) -> Self {
        Self {
            kind: DeclKind::Method,
            name,
            generic_suffix: String::new(),
            owner_type: Some(owner_type),
            start_line: line,
            end_line: line,
        }
    }

    /// Base name plus flattened generic suffix; what filename and coverage
    /// checks compare against, never the bracketed form.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        format!("{}{}", self.name, self.generic_suffix)
    }

    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.kind, DeclKind::Type(_))
    }

    #[must_use]
    pub const fn is_method(&self) -> bool {
        matches!(self.kind, DeclKind::Method)
    }
}
