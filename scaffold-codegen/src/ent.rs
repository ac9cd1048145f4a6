//! The aggregate every phase renders from.

use kratos_scaffold_config::ProjectConfig;
use kratos_scaffold_core::{capitalize, singularize, to_pascal_case};
use kratos_scaffold_field::{Error as FieldError, Field, PredicateParam};

/// One entity to generate: its name, where it lives and its fields.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEnt {
    /// Singular, capitalized entity name (`User`).
    pub name: String,
    pub namespace: String,
    /// `<app_dir>/<namespace>`, or empty when there is no namespace.
    pub app_dir_name: String,
    pub fields: Vec<Field>,
}

impl DataEnt {
    pub fn new(
        raw_name: &str,
        namespace: &str,
        fields: Vec<Field>,
        project: &ProjectConfig,
    ) -> kratos_scaffold_field::Result<Self> {
        let trimmed =
            raw_name.trim_matches(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '.'));
        let name = singularize(&capitalize(trimmed));
        if name.is_empty() {
            return Err(Box::new(FieldError::EmptyEntityName {
                raw: raw_name.to_string(),
            }));
        }

        for (i, field) in fields.iter().enumerate() {
            let key = to_pascal_case(&field.name).to_lowercase();
            if let Some(earlier) = fields[..i]
                .iter()
                .find(|f| to_pascal_case(&f.name).to_lowercase() == key)
            {
                return Err(Box::new(FieldError::DuplicateField {
                    first: earlier.name.clone(),
                    second: field.name.clone(),
                }));
            }
        }

        let namespace = namespace.trim().trim_matches('/');
        let app_dir_name = if namespace.is_empty() {
            String::new()
        } else {
            format!("{}/{}", project.app_dir.trim_end_matches('/'), namespace)
        };

        Ok(Self {
            name,
            namespace: namespace.to_string(),
            app_dir_name,
            fields,
        })
    }

    /// Every field except the one named exactly `id`, in declaration order.
    pub fn fields_except_primary(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| !f.is_primary()).collect()
    }

    /// Query parameters in field order, then predicate order.
    pub fn param_fields(&self) -> Vec<PredicateParam> {
        self.fields.iter().flat_map(Field::params).collect()
    }

    pub fn primary_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_primary())
    }

    /// Go type of the primary key; ent defaults to `int` when no `id` field is declared.
    pub fn id_type(&self) -> &str {
        self.primary_field()
            .map(|f| f.declared_type.as_str())
            .unwrap_or("int")
    }

    /// Whether `index` is the last position of `items`.
    pub fn is_last<T>(index: usize, items: &[T]) -> bool {
        index + 1 == items.len()
    }
}
