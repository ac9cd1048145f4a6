/// How a declared field type maps onto ent and Go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoType {
    /// ent field builder (`field.Int64`).
    pub ent_builder: &'static str,
    /// Go type of the generated struct field.
    pub go_type: &'static str,
    /// Import needed by `go_type`, if any.
    pub import: Option<&'static str>,
    /// Extra builder argument after the field name (`uuid.UUID{}`).
    pub extra_arg: Option<&'static str>,
}

impl GoType {
    const fn plain(ent_builder: &'static str, go_type: &'static str) -> Self {
        Self {
            ent_builder,
            go_type,
            import: None,
            extra_arg: None,
        }
    }

    /// Look up a declared type; `None` for types ent has no builder for.
    pub fn resolve(declared: &str) -> Option<Self> {
        let ty = match declared.trim() {
            "int" => Self::plain("Int", "int"),
            "int8" => Self::plain("Int8", "int8"),
            "int16" => Self::plain("Int16", "int16"),
            "int32" => Self::plain("Int32", "int32"),
            "int64" => Self::plain("Int64", "int64"),
            "uint" => Self::plain("Uint", "uint"),
            "uint8" => Self::plain("Uint8", "uint8"),
            "uint16" => Self::plain("Uint16", "uint16"),
            "uint32" => Self::plain("Uint32", "uint32"),
            "uint64" => Self::plain("Uint64", "uint64"),
            "float32" => Self::plain("Float32", "float32"),
            "float" | "float64" => Self::plain("Float", "float64"),
            "string" => Self::plain("String", "string"),
            "bool" => Self::plain("Bool", "bool"),
            "bytes" | "[]byte" => Self::plain("Bytes", "[]byte"),
            "time" | "time.Time" => Self {
                import: Some("time"),
                ..Self::plain("Time", "time.Time")
            },
            "uuid" | "uuid.UUID" => Self {
                import: Some("github.com/google/uuid"),
                extra_arg: Some("uuid.UUID{}"),
                ..Self::plain("UUID", "uuid.UUID")
            },
            _ => return None,
        };
        Some(ty)
    }

    /// The builder call for a field: `field.Int64("age")`.
    pub fn builder_call(&self, column: &str) -> String {
        match self.extra_arg {
            Some(arg) => format!("field.{}(\"{}\", {})", self.ent_builder, column, arg),
            None => format!("field.{}(\"{}\")", self.ent_builder, column),
        }
    }
}
